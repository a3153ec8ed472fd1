//! Trains a small MLP to separate the two moons.
//!
//! Run with `RUST_LOG=info cargo run -p micrograd-data --example moons`.
//! Set `PREFERRED_DEVICE=cpu|cuda|hpu` to request a device.

use log::info;
use micrograd_core::backend::{dispatch, BackendVisitor};
use micrograd_core::config::BackendConfig;
use micrograd_core::device::HostProbe;
use micrograd_core::nn::{accuracy, max_margin_loss, Module, MLP};
use micrograd_core::optim::{LinearDecay, LrScheduler, Optimizer, Sgd};
use micrograd_core::{Backend, Device, MicrogradError, Value};
use micrograd_data::{collect_batch, make_moons, BatchSampler, Dataset, Sampler, VecDataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

const N_SAMPLES: usize = 100;
const NOISE: f64 = 0.1;
const STEPS: usize = 100;
const ALPHA: f64 = 1e-4;
const SEED: u64 = 1337;

struct TrainMoons {
    dataset: VecDataset<[f64; 2], f64>,
}

impl BackendVisitor for TrainMoons {
    type Output = Result<(), MicrogradError>;

    fn visit<B: Backend>(self, device: Device) -> Self::Output {
        let mut rng = StdRng::seed_from_u64(SEED);
        let model = MLP::<B>::new(2, &[16, 16, 1], &mut rng);
        info!("{}", model);
        info!(
            "number of parameters {} on {} ({} backend)",
            model.num_parameters(),
            device,
            B::NAME
        );

        let mut sampler = BatchSampler::new(None, SEED);
        let schedule = LinearDecay::new(1.0, 0.1, STEPS);
        let mut optim = Sgd::new(schedule.lr_at(0));

        for k in 0..STEPS {
            let batch = collect_batch(&self.dataset, &sampler.indices(self.dataset.len()))?;
            let labels: Vec<f64> = batch.iter().map(|(_, y)| *y).collect();
            let scores: Vec<Value<B>> = batch
                .iter()
                .map(|(x, _)| model.forward_raw(x).map(|out| out[0].clone()))
                .collect::<Result<_, _>>()?;

            let loss = max_margin_loss(&scores, &labels, &model.parameters(), ALPHA)?;
            let acc = accuracy(&scores, &labels)?;

            model.zero_grad();
            loss.backward();

            optim.set_learning_rate(schedule.lr_at(k));
            optim.step(&model.parameters())?;

            info!(
                "step {} loss {:.6}, accuracy {:.1}%",
                k,
                loss.data_f64(),
                acc * 100.0
            );
        }
        Ok(())
    }
}

fn main() -> Result<(), MicrogradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let device = BackendConfig::from_env()?.resolve(&HostProbe)?;
    let mut rng = StdRng::seed_from_u64(SEED);
    let dataset = make_moons(N_SAMPLES, NOISE, &mut rng)?;
    info!("Generated {} samples, training on {}", dataset.len(), device);

    dispatch(device, TrainMoons { dataset })
}
