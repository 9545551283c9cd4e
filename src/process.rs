//! Child process launching for `env run`

use crate::environments::{Secret, Variable};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::process::ExitStatus;
use tokio::process::Command;
use tracing::debug;

/// Build a child environment: `parent`, overlaid with each secret, then
/// with each variable. Later entries win on name collisions. Parent entries
/// are passed through as raw OS strings.
pub fn child_environment<I>(
    parent: I,
    secrets: &[Secret],
    variables: &[Variable],
) -> BTreeMap<OsString, OsString>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env: BTreeMap<OsString, OsString> = parent.into_iter().collect();
    for secret in secrets {
        env.insert(
            OsString::from(&secret.name),
            OsString::from(&secret.value),
        );
    }
    for variable in variables {
        env.insert(
            OsString::from(&variable.name),
            OsString::from(&variable.value),
        );
    }
    env
}

/// Run `command` with exactly `env` as its environment, inheriting stdio,
/// and return its exit code
pub async fn run_command(command: &[String], env: &BTreeMap<OsString, OsString>) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::invalid_argument("command", "no command given"))?;

    debug!("Running {} with {} environment entries", program, env.len());
    let status = Command::new(program)
        .args(args)
        .env_clear()
        .envs(env)
        .status()
        .await
        .map_err(|e| Error::command(program.as_str(), e.to_string()))?;

    Ok(exit_code(status))
}

/// Exit code of a finished process; signals map to `128 + signal` on Unix
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn os(value: &str) -> OsString {
        OsString::from(value)
    }

    fn secret(name: &str, value: &str) -> Secret {
        Secret {
            name: name.to_string(),
            value: value.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn variable(name: &str, value: &str) -> Variable {
        Variable {
            name: name.to_string(),
            value: value.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_child_environment_overlay_order() {
        let parent = vec![
            (os("PATH"), os("/bin")),
            (os("TOKEN"), os("parent")),
            (os("MODE"), os("parent")),
        ];
        let env = child_environment(
            parent,
            &[secret("TOKEN", "secret"), secret("MODE", "secret")],
            &[variable("MODE", "variable")],
        );

        assert_eq!(env[&os("PATH")], os("/bin"));
        assert_eq!(env[&os("TOKEN")], os("secret"));
        assert_eq!(env[&os("MODE")], os("variable"));
        assert_eq!(env.len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_child_environment_keeps_non_utf8_parent() {
        use std::os::unix::ffi::OsStringExt;

        let raw_value = OsString::from_vec(vec![0xff, 0xfe]);
        let parent = vec![(os("RAW"), raw_value.clone())];
        let env = child_environment(parent, &[secret("TOKEN", "s")], &[]);

        assert_eq!(env[&os("RAW")], raw_value);
        assert_eq!(env[&os("TOKEN")], os("s"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_passes_non_utf8_value() {
        use std::os::unix::ffi::OsStringExt;

        let mut env = BTreeMap::new();
        env.insert(os("RAW"), OsString::from_vec(vec![b'a', 0xff]));
        let command = vec![
            "/bin/sh".to_string(),
            "-c".to_string(),
            "[ -n \"$RAW\" ]".to_string(),
        ];
        let code = run_command(&command, &env).await.unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_child_environment_empty() {
        let env = child_environment(Vec::new(), &[], &[]);
        assert!(env.is_empty());
    }

    #[tokio::test]
    async fn test_run_command_empty() {
        let result = run_command(&[], &BTreeMap::new()).await;
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn test_run_command_not_found() {
        let command = vec!["/definitely/not/a/program".to_string()];
        let result = run_command(&command, &BTreeMap::new()).await;
        assert!(matches!(result, Err(Error::Command { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_exit_code_and_env() {
        let mut env = BTreeMap::new();
        env.insert(os("EXPECTED"), os("yes"));
        let command = vec![
            "/bin/sh".to_string(),
            "-c".to_string(),
            "[ \"$EXPECTED\" = yes ] && exit 7".to_string(),
        ];

        let code = run_command(&command, &env).await.unwrap();
        assert_eq!(code, 7);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_clears_parent_env() {
        let command = vec![
            "/bin/sh".to_string(),
            "-c".to_string(),
            "[ -z \"$HOME\" ]".to_string(),
        ];
        let code = run_command(&command, &BTreeMap::new()).await.unwrap();
        assert_eq!(code, 0);
    }
}
