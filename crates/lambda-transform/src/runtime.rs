//! Runtime exec-argument resolver.
//!
//! Each runtime has a fixed argument template. The handler goes into a named
//! slot of the template, so adding or removing literal arguments never moves
//! it.

use lambda_model::constants::{
    JAVA_LAMBDA_RUNTIME_COMMAND, LAMBDA_EXEC_ARGS_HANDLER, NODEJS_LAMBDA_RUNTIME_COMMAND,
    PYTHON_LAMBDA_RUNTIME_COMMAND,
};
use lambda_model::{LambdaRuntime, Result, TransformError};

/// One position in an exec-argument template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecArg {
    /// Emitted as-is.
    Literal(&'static str),
    /// Replaced by `--handler=<name>`.
    Handler,
}

/// Interpreter invocation for one runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecArgTemplate {
    pub runtime: LambdaRuntime,
    pub args: &'static [ExecArg],
}

impl ExecArgTemplate {
    /// Render the template for `handler`.
    pub fn render(&self, handler: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| match arg {
                ExecArg::Literal(text) => (*text).to_string(),
                ExecArg::Handler => handler_argument(handler),
            })
            .collect()
    }
}

const PYTHON27_ARGS: &[ExecArg] = &[
    ExecArg::Literal("python2.7"),
    ExecArg::Literal("-u"),
    ExecArg::Literal(PYTHON_LAMBDA_RUNTIME_COMMAND),
    ExecArg::Handler,
];
const PYTHON37_ARGS: &[ExecArg] = &[
    ExecArg::Literal("python3.7"),
    ExecArg::Literal("-u"),
    ExecArg::Literal(PYTHON_LAMBDA_RUNTIME_COMMAND),
    ExecArg::Handler,
];
const PYTHON38_ARGS: &[ExecArg] = &[
    ExecArg::Literal("python3.8"),
    ExecArg::Literal("-u"),
    ExecArg::Literal(PYTHON_LAMBDA_RUNTIME_COMMAND),
    ExecArg::Handler,
];
const JAVA8_ARGS: &[ExecArg] = &[
    ExecArg::Literal("java8"),
    ExecArg::Literal(JAVA_LAMBDA_RUNTIME_COMMAND),
    ExecArg::Handler,
];
const NODEJS10_ARGS: &[ExecArg] = &[
    ExecArg::Literal("nodejs10.x"),
    ExecArg::Literal(NODEJS_LAMBDA_RUNTIME_COMMAND),
    ExecArg::Handler,
];
const NODEJS12_ARGS: &[ExecArg] = &[
    ExecArg::Literal("nodejs12.x"),
    ExecArg::Literal(NODEJS_LAMBDA_RUNTIME_COMMAND),
    ExecArg::Handler,
];

static RUNTIME_EXEC_ARGS: [ExecArgTemplate; 6] = [
    ExecArgTemplate {
        runtime: LambdaRuntime::Python27,
        args: PYTHON27_ARGS,
    },
    ExecArgTemplate {
        runtime: LambdaRuntime::Python37,
        args: PYTHON37_ARGS,
    },
    ExecArgTemplate {
        runtime: LambdaRuntime::Python38,
        args: PYTHON38_ARGS,
    },
    ExecArgTemplate {
        runtime: LambdaRuntime::Java8,
        args: JAVA8_ARGS,
    },
    ExecArgTemplate {
        runtime: LambdaRuntime::Nodejs10X,
        args: NODEJS10_ARGS,
    },
    ExecArgTemplate {
        runtime: LambdaRuntime::Nodejs12X,
        args: NODEJS12_ARGS,
    },
];

/// Every registered exec-argument template.
pub fn exec_arg_templates() -> &'static [ExecArgTemplate] {
    &RUNTIME_EXEC_ARGS
}

/// Template registered for `runtime`.
///
/// # Errors
///
/// Returns [`TransformError::UnsupportedRuntime`] if no template is registered.
pub fn exec_arg_template(runtime: LambdaRuntime) -> Result<&'static ExecArgTemplate> {
    RUNTIME_EXEC_ARGS
        .iter()
        .find(|template| template.runtime == runtime)
        .ok_or_else(|| TransformError::UnsupportedRuntime {
            runtime: runtime.to_string(),
        })
}

/// Ordered arguments that start `runtime` with `handler`.
///
/// # Errors
///
/// Returns [`TransformError::UnsupportedRuntime`] if no template is registered.
pub fn exec_args_for(handler: &str, runtime: LambdaRuntime) -> Result<Vec<String>> {
    Ok(exec_arg_template(runtime)?.render(handler))
}

/// Parse a runtime identifier from a template document.
///
/// # Errors
///
/// Returns [`TransformError::UnsupportedRuntime`] for identifiers that are not
/// a known runtime or have no exec-argument template.
pub fn resolve_runtime(name: &str) -> Result<LambdaRuntime> {
    let runtime = name
        .parse::<LambdaRuntime>()
        .map_err(|_| TransformError::UnsupportedRuntime {
            runtime: name.to_string(),
        })?;
    exec_arg_template(runtime)?;
    Ok(runtime)
}

/// The `--handler=` argument for `handler`.
fn handler_argument(handler: &str) -> String {
    format!("{LAMBDA_EXEC_ARGS_HANDLER}{handler}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_argument_carries_flag() {
        assert_eq!(
            handler_argument("hello_world.handler"),
            "--handler=hello_world.handler"
        );
    }

    #[test]
    fn every_runtime_has_a_template() {
        for runtime in LambdaRuntime::ALL {
            let template = exec_arg_template(runtime).unwrap();
            assert_eq!(
                template
                    .args
                    .iter()
                    .filter(|arg| **arg == ExecArg::Handler)
                    .count(),
                1,
                "{runtime} needs exactly one handler slot"
            );
            assert_eq!(template.args[0], ExecArg::Literal(runtime.as_str()));
        }
    }

    #[test]
    fn python_args() {
        assert_eq!(
            exec_args_for("h.handler", LambdaRuntime::Python37).unwrap(),
            vec![
                "python3.7",
                "-u",
                "/runtime/python/lambda_runtime.py",
                "--handler=h.handler"
            ]
        );
    }

    #[test]
    fn java_and_node_args() {
        assert_eq!(
            exec_args_for("com.example.Handler::handle", LambdaRuntime::Java8).unwrap(),
            vec![
                "java8",
                "com.amazonaws.greengrass.runtime.LambdaRuntime",
                "--handler=com.example.Handler::handle"
            ]
        );
        assert_eq!(
            exec_args_for("index.handler", LambdaRuntime::Nodejs12X).unwrap(),
            vec![
                "nodejs12.x",
                "/runtime/nodejs/lambda_nodejs_runtime.js",
                "--handler=index.handler"
            ]
        );
    }

    #[test]
    fn unknown_runtime_is_unsupported() {
        let error = resolve_runtime("fortran").unwrap_err();
        assert!(matches!(
            error,
            TransformError::UnsupportedRuntime { ref runtime } if runtime == "fortran"
        ));
        assert_eq!(resolve_runtime("java8").unwrap(), LambdaRuntime::Java8);
    }
}
