mod compiler;
mod inputs;
pub use anyhow;
pub use compiler::{
    build_args, compile_dir, compile_file, is_vertex_stage, resolve_compiler,
    resolve_compiler_from, shader_sources, CompilerError, SDK_ENV_VAR, SHADER_EXTENSIONS,
};
pub use inputs::{define_args, InputBinding, INPUT_BINDINGS};
