mod result;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::debug;
use log::error;
use log::info;
use log::warn;
use log::Level;
use log::LevelFilter;
use result::TimetablerResult;
use timetabler_solver::convert_case::Case;
use timetabler_solver::options::*;
use timetabler_solver::parsers::tim::parse_tim;
use timetabler_solver::parsers::tim::DEFAULT_NUM_TIMESLOTS;
use timetabler_solver::rand::rngs::SmallRng;
use timetabler_solver::rand::SeedableRng;
use timetabler_solver::results::*;
use timetabler_solver::solution_writer::write_solution;
use timetabler_solver::statistics::configure_statistic_logging;
use timetabler_solver::termination::IterationBudget;
use timetabler_solver::TimetableSolver;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to solve, given in the '*.tim' format of the International Timetabling
    /// Competition. The file may be extended with a timeslot availability section and a
    /// precedence section.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The file to which the timetable is written, one 'timeslot room' line per event.
    ///
    /// If it is not provided, the timetable is written to standard output.
    #[arg(short = 'o', long = "output", verbatim_doc_comment)]
    output_path: Option<PathBuf>,

    /// The number of timeslots of the instance.
    ///
    /// Possible values: usize
    #[arg(long = "num-timeslots", default_value_t = DEFAULT_NUM_TIMESLOTS, verbatim_doc_comment)]
    num_timeslots: usize,

    /// The number of iterations after which a single run gives up.
    ///
    /// Possible values: u64
    #[arg(
        long = "max-iterations",
        default_value_t = IterationBudget::DEFAULT_BUDGET,
        verbatim_doc_comment
    )]
    max_iterations: u64,

    /// The largest number of events for which the solver attempts to find a timetable.
    ///
    /// Possible values: usize
    #[arg(long = "max-events", default_value_t = 600, verbatim_doc_comment)]
    max_events: usize,

    /// The largest number of rooms for which the solver attempts to find a timetable.
    ///
    /// Possible values: usize
    #[arg(long = "max-rooms", default_value_t = 20, verbatim_doc_comment)]
    max_rooms: usize,

    /// The largest number of timeslots for which the solver attempts to find a timetable. It can
    /// not be raised beyond 64.
    ///
    /// Possible values: usize
    #[arg(long = "max-timeslots", default_value_t = 64, verbatim_doc_comment)]
    max_timeslots: usize,

    /// How ties between equally scarce timeslots are broken.
    #[arg(long = "tie-breaking", value_enum, default_value_t)]
    tie_breaking: TieBreaking,

    /// The random seed to use for the Pseudo Random Number Generator.
    ///
    /// Run `i` (counting from 0) is seeded with `random_seed + i`.
    ///
    /// Possible values: u64
    #[arg(
        short = 'r',
        long = "random-seed",
        default_value_t = 42,
        verbatim_doc_comment
    )]
    random_seed: u64,

    /// The number of independent runs; the solver stops at the first run which finds a
    /// timetable.
    ///
    /// Possible values: u64
    #[arg(long = "runs", default_value_t = 1, verbatim_doc_comment)]
    runs: u64,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// If `--verbose` is enabled then this option removes the timestamp information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-timestamp", verbatim_doc_comment)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled then this option removes the call site information from the log
    /// messages. The call site is the file and line from which the message originated.
    ///
    /// Possible values: bool
    #[arg(long = "omit-call-site", default_value_t = false, verbatim_doc_comment)]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("c STAT", None, Some(Case::Snake), None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> TimetablerResult<()> {
    let args = Args::parse();

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    )?;

    if timetabler_solver::asserts::TIMETABLER_ASSERT_LEVEL_DEFINITION
        >= timetabler_solver::asserts::TIMETABLER_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the Timetabler assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            timetabler_solver::asserts::TIMETABLER_ASSERT_LEVEL_DEFINITION
        );
    }

    info!("Reading instance from {}", args.instance_path.display());
    let instance = parse_tim(File::open(&args.instance_path)?, args.num_timeslots)?;

    let limits = SearchLimits {
        max_events: args.max_events,
        max_rooms: args.max_rooms,
        max_timeslots: args.max_timeslots,
    };

    let mut last_reason = NotFoundReason::BudgetExhausted;
    for run in 0..args.runs.max(1) {
        let seed = args.random_seed.wrapping_add(run);
        debug!("Starting run {run} with seed {seed}");

        let mut solver = TimetableSolver::with_options(SolverOptions {
            limits,
            random_generator: SmallRng::seed_from_u64(seed),
            tie_breaking: args.tie_breaking,
        });
        let mut termination = IterationBudget::new(args.max_iterations);
        let result = solver.solve(&instance, &mut termination)?;
        solver.log_statistics();

        match result {
            SearchResult::Satisfiable(solution) => {
                if !solution.is_valid(&instance) {
                    for violation in solution.violations(&instance) {
                        warn!("The timetable violates a constraint: {violation}");
                    }
                }

                println!("s SATISFIABLE");
                match &args.output_path {
                    Some(path) => write_solution(&solution, BufWriter::new(File::create(path)?))?,
                    None => write_solution(&solution, std::io::stdout().lock())?,
                }
                return Ok(());
            }
            SearchResult::NotFound(reason) => {
                last_reason = reason;
                if reason == NotFoundReason::SearchSpaceExhausted {
                    // Every run explores the same search space.
                    break;
                }
            }
        }
    }

    match last_reason {
        NotFoundReason::BudgetExhausted => println!("s UNKNOWN"),
        NotFoundReason::SearchSpaceExhausted => println!("s EXHAUSTED"),
    }
    Ok(())
}
