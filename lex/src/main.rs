use clap::Parser;
use color_print::{ceprintln, cprintln};
use vmlex::{Error, InstList, ScanConfig, Scanner};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.vm")]
    input: String,

    /// Dump instruction stream
    #[clap(short, long)]
    dump: bool,

    /// Print instruction stream as YAML
    #[clap(long)]
    yaml: bool,

    /// Fail on unknown commands
    #[clap(long)]
    strict: bool,

    /// Enable verbose output
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        ceprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = ScanConfig {
        strict: args.strict,
    };

    if args.verbose {
        eprintln!("1. Scan Lines");
        eprintln!("  < {}", args.input);
    }
    let scan = Scanner::open(&args.input, config)?.scan();
    scan.msgs().dump(&args.input);

    if args.verbose {
        eprintln!("2. Check Result");
    }
    let insts = scan.finish()?;
    if args.verbose {
        eprintln!("  - found #{} instructions", insts.len());
    }

    if args.dump {
        print_dump(&args.input, &insts);
    }
    if args.yaml {
        print!("{}", serde_yaml::to_string(&insts)?);
    }
    Ok(())
}

fn print_dump(path: &str, insts: &InstList) {
    println!("------+-[{}]{}", path, "-".repeat(45usize.saturating_sub(path.len())));
    for (idx, inst) in insts.iter().enumerate() {
        cprintln!(" <green>{:>4}</> | {}", idx, inst.cformat());
    }
    println!("------+-----------------------------------------------");
}
