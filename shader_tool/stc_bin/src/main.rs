use stc_lib::anyhow::Result;
use std::path::PathBuf;
use std::process::exit;
use structopt::clap::ErrorKind;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "stc",
    about = "Cinder shader compiler utility.\n\
             Compiles GLSL or HLSL to SPIR-V as required by the engine. \
             Vertex-stage sources may use the CINDER_VERTEX_INPUT_* and \
             CINDER_INSTANCE_INPUT_* macros."
)]
struct Opt {
    /// Input shader file, or a directory of shader sources
    #[structopt(parse(from_os_str))]
    input: PathBuf,
    /// Output file, or the output directory in directory mode
    #[structopt(parse(from_os_str))]
    output: PathBuf,
    /// Verbose output
    #[structopt(short = "V", long = "verbose")]
    verbose: bool,
}

/// Too few arguments or a help flag both print usage and exit cleanly;
/// anything else keeps clap's usual failure exit.
fn exit_code_for(err: &structopt::clap::Error) -> Option<i32> {
    match err.kind {
        ErrorKind::HelpDisplayed
        | ErrorKind::VersionDisplayed
        | ErrorKind::MissingRequiredArgument => Some(0),
        _ => None,
    }
}

fn run(options: Opt) -> Result<i32> {
    let compiler = match stc_lib::resolve_compiler() {
        Ok(compiler) => compiler,
        Err(err) => {
            eprintln!("Error! {}", err);
            exit(-1);
        }
    };
    if options.verbose {
        println!("using compiler at: {}", compiler.display());
    }
    if options.input.is_dir() {
        stc_lib::compile_dir(&compiler, &options.input, &options.output)?;
        Ok(0)
    } else {
        let status = stc_lib::compile_file(&compiler, &options.input, &options.output)?;
        Ok(status.code().unwrap_or(-1))
    }
}

fn main() {
    env_logger::init();
    let options = match Opt::from_iter_safe(std::env::args()) {
        Ok(options) => options,
        Err(err) => match exit_code_for(&err) {
            Some(code) => {
                println!("{}", err.message);
                exit(code);
            }
            None => err.exit(),
        },
    };
    match run(options) {
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("Error! {:#}", err);
            exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(args: &[&str]) -> structopt::clap::Error {
        Opt::from_iter_safe(args.iter().copied()).unwrap_err()
    }

    #[test]
    fn too_few_arguments_exit_cleanly() {
        assert_eq!(exit_code_for(&parse_err(&["stc"])), Some(0));
        assert_eq!(exit_code_for(&parse_err(&["stc", "mesh.vert"])), Some(0));
    }

    #[test]
    fn help_flags_exit_cleanly() {
        assert_eq!(exit_code_for(&parse_err(&["stc", "-h"])), Some(0));
        assert_eq!(exit_code_for(&parse_err(&["stc", "--help"])), Some(0));
    }

    #[test]
    fn missing_arguments_still_print_usage() {
        let err = parse_err(&["stc"]);
        assert!(err.message.contains("USAGE"));
    }

    #[test]
    fn unknown_flags_keep_the_failure_exit() {
        let err = parse_err(&["stc", "--bogus", "mesh.vert", "mesh.vert.spv"]);
        assert_eq!(exit_code_for(&err), None);
    }

    #[test]
    fn two_arguments_parse() {
        let options =
            Opt::from_iter_safe(["stc", "mesh.vert", "mesh.vert.spv"].iter().copied()).unwrap();
        assert_eq!(options.input, PathBuf::from("mesh.vert"));
        assert_eq!(options.output, PathBuf::from("mesh.vert.spv"));
        assert!(!options.verbose);
    }
}
