//! Remote shell snippets issued by the fan-out

use crate::domain::value_objects::ConnectorName;

/// Quote a string for a POSIX shell
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Quote only when the string contains anything beyond plain path characters
pub fn shell_word(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ','));
    if plain {
        s.to_string()
    } else {
        shell_quote(s)
    }
}

/// Idempotent "create directory" command
pub fn mkdir_command(remote_dir: &str) -> String {
    format!("mkdir -p {}", shell_word(remote_dir))
}

/// Message for a remove that found nothing to remove
pub fn no_such_file_message(name: &ConnectorName, remote_path: &str) -> String {
    format!(
        "Could not remove connector '{}'. No such file '{}'",
        name, remote_path
    )
}

/// Remove the file if it is still there when the script runs, otherwise
/// print the no-such-file message. Covers a removal racing the existence check.
pub fn remove_script(name: &ConnectorName, remote_path: &str) -> String {
    let path = shell_word(remote_path);
    format!(
        "if [ -f {path} ] ; then rm {path} ; else echo \"{}\"; fi",
        no_such_file_message(name, remote_path)
    )
}
