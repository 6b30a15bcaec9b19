pub mod program;
pub mod shader;

use thiserror::Error;

use self::program::{LinkedProgram, Program};
use self::shader::{Shader, ShaderType};
use crate::gl_api::error::GlCallError;

/// Compile or link failure. The embedded info log is the only diagnostic
/// the driver produces for shader authoring mistakes, so it is carried
/// whole.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ShaderBuildError {
    #[error("error while compiling {shader_type} shader: {log}")]
    Compile { shader_type: ShaderType, log: String },
    #[error("error while linking program: {log}")]
    Link { log: String },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Build(#[from] ShaderBuildError),
    #[error(transparent)]
    Gl(#[from] GlCallError),
}

/// Compiles every (kind, source) pair, attaches each stage to one shared
/// program, links it, and activates it.
///
/// The list is attached exactly as given, in order, with no deduplication
/// of stage kinds. An empty list still creates and links an (empty)
/// program.
pub fn build_pipeline(stages: &[(ShaderType, &str)]) -> Result<LinkedProgram, PipelineError> {
    let program = Program::new()?;

    for &(shader_type, source) in stages {
        let stage = Shader::new(shader_type)?;
        stage.source(source)?;
        program.attach(&stage.compile()?)?;
    }

    let linked = program.link()?;
    linked.bind()?;
    Ok(linked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_failure_carries_the_log_verbatim() {
        let log = "0:3(2): error: `vPosition' undeclared".to_string();
        let err = ShaderBuildError::Compile {
            shader_type: ShaderType::Vertex,
            log: log.clone(),
        };
        assert!(err.to_string().contains(&log));
        assert!(err.to_string().contains("vertex"));
    }

    #[test]
    fn link_failure_is_distinct_from_compile_failure() {
        let err = ShaderBuildError::Link {
            log: "error: ffColor not written by vertex shader".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("linking"));
        assert!(message.contains("ffColor not written by vertex shader"));
    }
}
