use clap::{Parser, Subcommand};
use fitlog_core::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Personal fitness tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override state file name inside the data directory
    #[arg(long, global = true)]
    state_file: Option<String>,

    /// Print the events recorded during this run
    #[arg(long, global = true)]
    show_events: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the exercise catalog
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommand,
    },

    /// Log and review workouts
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Set or show the fitness goal
    Goal {
        #[command(subcommand)]
        action: GoalCommand,
    },

    /// Track body weight
    Weight {
        #[command(subcommand)]
        action: WeightCommand,
    },
}

#[derive(Subcommand)]
enum ExerciseCommand {
    /// Add an exercise (names are unique, ignoring case)
    Add { name: String, instructions: String },
    /// List all exercises
    List,
}

#[derive(Subcommand)]
enum WorkoutCommand {
    /// Log a workout
    Add {
        exercise_type: String,
        /// Duration in minutes
        minutes: u32,
        /// Low, Medium or High
        intensity: String,
    },
    /// List logged workouts
    List,
    /// Remove the first workout matching all three fields
    Remove {
        exercise_type: String,
        minutes: u32,
        intensity: String,
    },
}

#[derive(Subcommand)]
enum GoalCommand {
    /// Replace the current goal
    Set {
        /// e.g. "Weight Loss", "Muscle Gain"
        goal_type: String,
        /// e.g. "Lose 10 pounds"
        description: String,
    },
    /// Show the current goal
    Show,
}

#[derive(Subcommand)]
enum WeightCommand {
    /// Record a weight measurement
    Log {
        #[arg(value_parser = parse_weight)]
        weight: f64,
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the goal and all weight records
    List,
}

/// Accept any number with a JSON representation
fn parse_weight(raw: &str) -> std::result::Result<f64, String> {
    let weight: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(format!("{raw} is not a finite number"))
    }
}

/// Whether a command changed the in-memory state
#[derive(PartialEq)]
enum Outcome {
    Changed,
    Unchanged,
}

fn main() -> ExitCode {
    // Initialize logging
    fitlog_core::logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }
    if let Some(state_file) = cli.state_file {
        config.data.state_file = state_file;
    }
    config.validate()?;

    let state_path = config.state_path();
    tracing::debug!("Using state file {:?}", state_path);

    let mut events = EventLog::new();
    let mut state =
        FitnessState::load_or_fresh(&state_path, config.catalog.seed_defaults, &mut events)?;

    let outcome = match cli.command {
        Commands::Exercise { action } => cmd_exercise(&mut state, action, &mut events),
        Commands::Workout { action } => cmd_workout(&mut state, action, &mut events),
        Commands::Goal { action } => cmd_goal(&mut state, action, &mut events),
        Commands::Weight { action } => cmd_weight(&mut state, action, &mut events),
    };

    if outcome == Outcome::Changed {
        state.save(&state_path)?;
        println!("Data saved to {}", state_path.display());
    }

    if cli.show_events {
        print_events(&events);
    }

    Ok(())
}

fn cmd_exercise(state: &mut FitnessState, action: ExerciseCommand, events: &mut EventLog) -> Outcome {
    match action {
        ExerciseCommand::Add { name, instructions } => {
            if state.catalog.add(Exercise::new(name, instructions), events) {
                println!("Exercise added successfully.");
                Outcome::Changed
            } else {
                println!("Exercise already exists.");
                Outcome::Unchanged
            }
        }
        ExerciseCommand::List => {
            let exercises = state.catalog.list();
            if exercises.is_empty() {
                println!("No exercises in database.");
            } else {
                println!("Available Exercises:");
                for exercise in exercises {
                    println!("{}", exercise);
                }
            }
            Outcome::Unchanged
        }
    }
}

fn cmd_workout(state: &mut FitnessState, action: WorkoutCommand, events: &mut EventLog) -> Outcome {
    match action {
        WorkoutCommand::Add {
            exercise_type,
            minutes,
            intensity,
        } => {
            state
                .workouts
                .add(Workout::new(exercise_type, minutes, intensity), events);
            println!("Workout added successfully.");
            Outcome::Changed
        }
        WorkoutCommand::List => {
            let workouts = state.workouts.list();
            if workouts.is_empty() {
                println!("No workouts logged yet.");
            } else {
                println!("Logged Workouts:");
                for workout in workouts {
                    println!("{}", workout);
                }
            }
            Outcome::Unchanged
        }
        WorkoutCommand::Remove {
            exercise_type,
            minutes,
            intensity,
        } => {
            if state
                .workouts
                .remove(&Workout::new(exercise_type, minutes, intensity))
            {
                println!("Workout removed.");
                Outcome::Changed
            } else {
                println!("No matching workout found.");
                Outcome::Unchanged
            }
        }
    }
}

fn cmd_goal(state: &mut FitnessState, action: GoalCommand, events: &mut EventLog) -> Outcome {
    match action {
        GoalCommand::Set {
            goal_type,
            description,
        } => {
            state.goal.set_goal_type(goal_type);
            state.goal.set_description(description, events);
            println!("Fitness goal set successfully.");
            Outcome::Changed
        }
        GoalCommand::Show => {
            print_goal(&state.goal);
            Outcome::Unchanged
        }
    }
}

fn cmd_weight(state: &mut FitnessState, action: WeightCommand, events: &mut EventLog) -> Outcome {
    match action {
        WeightCommand::Log { weight, date } => {
            let date =
                date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            state.weights.log(date, weight, events);
            println!("Weight logged successfully.");
            Outcome::Changed
        }
        WeightCommand::List => {
            print_goal(&state.goal);

            let records = state.weights.list();
            if records.is_empty() {
                println!("No weight records found.");
            } else {
                println!("\nWeight Records:");
                for record in records {
                    println!("{}", record);
                }
            }
            Outcome::Unchanged
        }
    }
}

fn print_goal(goal: &Goal) {
    if goal.is_set() {
        println!("Fitness Goal: {} - {}", goal.goal_type(), goal.description());
    } else {
        println!("No fitness goal set.");
    }
}

fn print_events(events: &EventLog) {
    println!("\nEvent Log:");
    if events.is_empty() {
        println!("  (no events)");
    }
    for event in events {
        println!("{}\n", event);
    }
}
