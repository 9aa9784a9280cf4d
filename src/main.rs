use clap::Parser;

use commands::GlobalArgs;

mod commands;
mod output;

use commands::trim;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "trim-spaces-in-paths")]
#[command(version = VERSION)]
#[command(about = "Normalize whitespace in tracked file and directory names")]
#[command(args_override_self = true)]
struct Cli {
    /// Print a JSON envelope instead of hook text
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    trim: trim::TrimArgs,
}

fn main() -> std::process::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse_from(commands::hook_argv(std::env::args_os()));
    let global = GlobalArgs { json: cli.json };

    let exit_code = match trim::run(cli.trim, &global) {
        Ok((report, exit_code)) => {
            let printed = if global.json {
                output::print_json_report(&report)
            } else {
                output::print_text_report(&report)
            };
            match printed {
                Ok(()) => exit_code,
                Err(err) => {
                    log::error!("{}", err);
                    1
                }
            }
        }
        Err(err) => {
            if let Err(print_err) = output::print_error(&err, global.json) {
                log::error!("{}", print_err);
            }
            output::exit_code_for_error(err.code)
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
