//! Bot command parsing (`/name@bot arg1 arg2`).

/// Splits a command message into its name and whitespace-separated arguments.
///
/// Returns `None` unless `text` starts with `/` followed by a non-empty name. A trailing
/// `@botname` on the command token is dropped. Names are case-sensitive.
pub fn parse_command(text: &str) -> Option<(String, Vec<String>)> {
    let rest = text.strip_prefix('/')?;
    let mut parts = rest.split_whitespace();
    let token = parts.next()?;
    let name = token.split('@').next().unwrap_or(token);
    if name.is_empty() || text[1..].starts_with(char::is_whitespace) {
        return None;
    }
    let args = parts.map(str::to_string).collect();
    Some((name.to_string(), args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_without_args() {
        assert_eq!(parse_command("/start"), Some(("start".to_string(), vec![])));
    }

    #[test]
    fn test_parse_command_with_args_collapses_whitespace() {
        let (name, args) = parse_command("/websearch   hello \t world ").unwrap();
        assert_eq!(name, "websearch");
        assert_eq!(args, vec!["hello", "world"]);
    }

    #[test]
    fn test_parse_command_strips_bot_mention() {
        let (name, args) = parse_command("/websearch@gbot rust").unwrap();
        assert_eq!(name, "websearch");
        assert_eq!(args, vec!["rust"]);
    }

    #[test]
    fn test_parse_command_is_case_sensitive() {
        assert_eq!(parse_command("/Start").unwrap().0, "Start");
    }

    #[test]
    fn test_parse_command_rejects_non_commands() {
        assert!(parse_command("hello /start").is_none());
        assert!(parse_command("/").is_none());
        assert!(parse_command("/ start").is_none());
        assert!(parse_command("").is_none());
    }
}
