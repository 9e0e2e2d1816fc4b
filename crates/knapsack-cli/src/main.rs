use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env};
use knapsack_solver::{DynamicSolver, Knapsack, KnapsackError, KnapsackSolver, SolverStatus};

const LOG_ENV: &str = "KNAPSACK_LOG";

#[derive(Parser)]
#[command(name = "knapsack")]
#[command(about = "Exact 0/1 knapsack solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a problem given in standard form: N CAPACITY W_1..W_N V_1..V_N
    Solve {
        /// The standard encoding
        #[arg(required = true, allow_negative_numbers = true)]
        kp_std: Vec<i64>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
        /// List every item instead of a summary
        #[arg(short, long)]
        verbose: bool,
    },
    /// Decode a standard form and print the exported (value, weight) form
    Encode {
        /// The standard encoding
        #[arg(required = true, allow_negative_numbers = true)]
        kp_std: Vec<i64>,
    },
    /// Solve the built-in sample problems
    Demo {
        /// Add the seven-item QQ group to the sample
        #[arg(long)]
        extended: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

fn main() {
    let env = Env::new().filter_or(LOG_ENV, "warn");
    Builder::from_env(env).try_init().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            kp_std,
            format,
            verbose,
        } => {
            let mut solver = match DynamicSolver::from_standard(&kp_std) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            if !solver.optimize() {
                eprintln!("Optimization failed (status {})", solver.status());
                std::process::exit(1);
            }

            match format {
                Format::Json => {
                    let output = serde_json::json!({
                        "status": solver.status(),
                        "knapsack": solver.knapsack(),
                        "solution": solver.solution(),
                    });
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&output)
                            .unwrap_or_else(|e| format!("Error: {}", e))
                    );
                }
                Format::Pretty => {
                    if verbose {
                        if let Some(knapsack) = solver.knapsack() {
                            println!("{:#}", knapsack);
                        }
                    }
                    print_result(&solver);
                }
            }
        }
        Commands::Encode { kp_std } => match Knapsack::from_standard(&kp_std) {
            Ok(knapsack) => {
                let encoded: Vec<String> = knapsack
                    .to_standard()
                    .iter()
                    .map(|x| x.to_string())
                    .collect();
                println!("{}", encoded.join(" "));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Demo { extended } => {
            for capacity in [10, 5] {
                let knapsack = match demo_knapsack(capacity, extended) {
                    Ok(k) => k,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                };

                println!("{}", "-".repeat(30));
                println!("Capacity {}", capacity);
                println!("{}", "-".repeat(30));

                let mut solver = DynamicSolver::new();
                solver.link(&knapsack);
                println!("Solver status after linking:");
                println!("{}", solver.describe_status());

                if solver.optimize() {
                    println!("Solver status after optimization:");
                    println!("{}", solver.describe_status());
                    print_result(&solver);
                } else {
                    println!("Optimization failed.");
                }
                println!();
            }
        }
    }
}

fn print_result(solver: &DynamicSolver<'_>) {
    match (solver.status(), solver.result_strings()) {
        (SolverStatus::Optimal, Some([value, items])) => {
            println!("Status: OPTIMAL");
            println!("Optimal value: {}", value);
            println!("Items chosen: {}", items);
        }
        (status, _) => {
            println!("Status: {}", status);
        }
    }
}

fn demo_knapsack(capacity: i64, extended: bool) -> Result<Knapsack, KnapsackError> {
    let mut knapsack = Knapsack::new(capacity)?;
    knapsack.add_item("Sun", 1, 2)?;
    knapsack.add_item("Star", 2, 1)?;
    knapsack.add_item("Shine", 1, 1)?;
    knapsack.add_item_group("Hello", &[2, 3, 4], &[3, 2, 1])?;
    if extended {
        knapsack.add_item_group("QQ", &[1, 2, 3, 4, 5, 6, 7], &[7, 6, 5, 4, 3, 2, 1])?;
    }
    Ok(knapsack)
}
