// Demonstration: sweep a grid world with a drone swarm and evaluate the result.
//
// Build/run from this repo root:
//   cargo run --example sweep_demo -- --grid 8 --agents 4 --episodes 50 --policy sweep

#[cfg(feature = "sim")]
fn main() {
    use std::env;

    use swarm_sweep::algorithms::sweep::{
        EvaluationMetrics, GridWorld, GridWorldConfig, Policy, RandomPolicy, SwarmConfig,
        SwarmCoordinator,
    };
    use swarm_sweep::algorithms::SearchAlgorithm;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("A tracing subscriber is already installed.");
    }

    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("sweep");
    let swarm = SwarmConfig {
        grid_size: parsed(&args, "--grid").unwrap_or(8),
        n_agents: parsed(&args, "--agents").unwrap_or(4),
    };
    let episodes: usize = parsed(&args, "--episodes").unwrap_or(25);
    let seed: u64 = parsed(&args, "--seed").unwrap_or(42);

    let coordinator = match SwarmCoordinator::from_config(&swarm) {
        Ok(coordinator) => coordinator,
        Err(err) => {
            eprintln!("Invalid swarm configuration: {}", err);
            std::process::exit(2);
        }
    };
    let mut env = GridWorld::new(GridWorldConfig::for_swarm(&swarm), seed);

    let algorithm: &dyn SearchAlgorithm = &coordinator;
    match algorithm.search(&mut env) {
        Ok(outcome) => println!(
            "{}: found={} after {} ticks (target {:?})",
            algorithm.name(),
            outcome.found,
            outcome.ticks,
            env.target()
        ),
        Err(err) => {
            eprintln!("Search failed: {}", err);
            std::process::exit(1);
        }
    }

    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::new(
            coordinator.plan().agent_ids().to_vec(),
            seed,
        )),
        "sweep" => match coordinator.policy() {
            Ok(policy) => Box::new(policy),
            Err(err) => {
                eprintln!("Cannot build sweep policy: {}", err);
                std::process::exit(2);
            }
        },
        other => {
            eprintln!("Unknown --policy '{}'; expected 'sweep' or 'random'.", other);
            std::process::exit(2);
        }
    };

    match EvaluationMetrics::evaluate(&mut env, &coordinator, policy.as_mut(), episodes) {
        Ok(metrics) => {
            println!("Policy: {}", policy.name());
            println!("{}", metrics);
        }
        Err(err) => {
            eprintln!("Evaluation failed: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "sim"))]
fn main() {
    eprintln!(
        "This example requires the 'sim' feature.\n\
Run:\n\
  cargo run --features sim --example sweep_demo -- --grid 8 --agents 4"
    );
}

#[cfg(feature = "sim")]
fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

#[cfg(feature = "sim")]
fn parsed<T: std::str::FromStr>(args: &[String], key: &str) -> Option<T> {
    arg_value(args, key).and_then(|s| s.parse().ok())
}
