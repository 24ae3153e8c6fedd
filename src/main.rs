use cidr_subnet_calc::config::{OutputFormat, Settings};
use cidr_subnet_calc::output::{render_result, render_subnets};
use cidr_subnet_calc::{calculate_cidr, calculate_subnets};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::path::Path;

#[derive(clap::Parser)]
#[clap(author, version, about = "IPv4 CIDR and subnet calculator", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format, overrides CIDR_CALC_FORMAT
    #[clap(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[clap(long)]
    no_color: bool,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Network facts for an address and mask, e.g. `cidr 192.168.1.0 /24`
    Cidr { address: String, mask: String },
    /// Split a parent block into equal subnets, e.g. `subnets 10.0.0.0/24 2 /25`
    Subnets {
        parent: String,
        count: u64,
        mask: String,
    },
}

fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(
                Root::builder()
                    .appender("stderr")
                    .build(log::LevelFilter::Warn),
            )?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn run(args: Args, settings: Settings) -> Result<String, Box<dyn Error>> {
    let format = args.format.unwrap_or(settings.format);
    match args.command {
        Command::Cidr { address, mask } => {
            let result = calculate_cidr(address.trim(), mask.trim())?;
            render_result(&result, format)
        }
        Command::Subnets {
            parent,
            count,
            mask,
        } => {
            let subnets = calculate_subnets(parent.trim(), count, mask.trim())?;
            render_subnets(&subnets, format)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = <Args as clap::Parser>::parse();
    let settings = Settings::load()?;
    init_logging(&settings.log_config)?;
    log::info!("#Start main()");

    if args.no_color || !settings.color {
        colored::control::set_override(false);
    }

    match run(args, settings) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
