use crate::inputs::define_args;
use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Environment variable pointing at the Vulkan SDK installation.
pub const SDK_ENV_VAR: &str = "VULKAN_SDK";

/// File extensions treated as shader source when compiling a directory.
pub const SHADER_EXTENSIONS: [&str; 6] = ["vert", "frag", "comp", "geom", "tesc", "tese"];

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("the {} environment variable is not set", SDK_ENV_VAR)]
    MissingSdk,
}

/// Locates glslangValidator inside the SDK named by `VULKAN_SDK`.
pub fn resolve_compiler() -> Result<PathBuf, CompilerError> {
    resolve_compiler_from(std::env::var_os(SDK_ENV_VAR))
}

pub fn resolve_compiler_from(sdk: Option<OsString>) -> Result<PathBuf, CompilerError> {
    let sdk = sdk.ok_or(CompilerError::MissingSdk)?;
    let binary = if cfg!(target_os = "windows") {
        "glslangValidator.exe"
    } else {
        "glslangValidator"
    };
    Ok(PathBuf::from(sdk).join("bin").join(binary))
}

/// Vertex-stage sources get the engine input defines; everything else
/// compiles bare. Match is case-insensitive and only consults the file
/// name, so a `.vert` somewhere in a parent directory name does not
/// count.
pub fn is_vertex_stage<P: AsRef<Path>>(input: P) -> bool {
    match input.as_ref().file_name().and_then(|name| name.to_str()) {
        Some(name) => name.to_lowercase().contains(".vert"),
        None => false,
    }
}

/// Builds the full compiler argument list for one input file, in the
/// fixed order: `-V <input> -o <output>` then the defines for vertex
/// stages.
pub fn build_args<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        OsString::from("-V"),
        input.as_ref().into(),
        OsString::from("-o"),
        output.as_ref().into(),
    ];
    if is_vertex_stage(&input) {
        args.extend(define_args().into_iter().map(OsString::from));
    }
    args
}

/// Runs the compiler on a single file. The exit status is the
/// compiler's own.
pub fn compile_file<P: AsRef<Path>, Q: AsRef<Path>>(
    compiler: &Path,
    input: P,
    output: Q,
) -> Result<ExitStatus> {
    let args = build_args(&input, &output);
    log::debug!(
        "{} {}",
        compiler.display(),
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Command::new(compiler)
        .args(&args)
        .status()
        .with_context(|| format!("failed to launch compiler at {}", compiler.display()))
}

/// Collects the shader sources directly inside `dir`, sorted by file
/// name so compile order is stable.
pub fn shader_sources<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("failed to read shader directory {}", dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_shader = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                SHADER_EXTENSIONS.iter().any(|known| *known == ext)
            })
            .unwrap_or(false);
        if is_shader {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Compiles every shader source directly inside `input_dir` into
/// `output_dir`, writing `<name>.spv` next to nothing else. Fails on
/// the first compile the external tool rejects.
pub fn compile_dir<P: AsRef<Path>, Q: AsRef<Path>>(
    compiler: &Path,
    input_dir: P,
    output_dir: Q,
) -> Result<()> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    let sources = shader_sources(&input_dir)?;
    if sources.is_empty() {
        bail!(
            "no shader sources found in {}",
            input_dir.as_ref().display()
        );
    }
    for source in sources {
        let output = output_path(&source, output_dir);
        let status = compile_file(compiler, &source, &output)?;
        if !status.success() {
            bail!("failed to compile {}", source.display());
        }
    }
    Ok(())
}

/// Where a directory-mode source lands: `<output_dir>/<name>.spv`.
fn output_path(source: &Path, output_dir: &Path) -> PathBuf {
    let mut out_name = source
        .file_name()
        .expect("shader_sources only returns files")
        .to_os_string();
    out_name.push(".spv");
    output_dir.join(out_name)
}
