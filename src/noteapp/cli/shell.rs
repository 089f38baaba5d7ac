/// Splits an input line into words. Whitespace separates words, and single or
/// double quotes group them (`title "Weekly plan"`). Quotes do not nest and
/// there are no escapes.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unclosed quote: {}", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            split_words("  fav   2 ").unwrap(),
            vec!["fav".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split_words(r#"title "Weekly plan" 'and more'"#).unwrap(),
            vec!["title", "Weekly plan", "and more"]
        );
    }

    #[test]
    fn empty_quotes_produce_empty_word() {
        assert_eq!(split_words(r#"title """#).unwrap(), vec!["title", ""]);
    }

    #[test]
    fn other_quote_kind_is_literal_inside_quotes() {
        assert_eq!(
            split_words(r#"content "it's fine""#).unwrap(),
            vec!["content", "it's fine"]
        );
    }

    #[test]
    fn unclosed_quote_is_an_error() {
        assert!(split_words(r#"title "oops"#).is_err());
    }

    #[test]
    fn blank_line_has_no_words() {
        assert!(split_words("   ").unwrap().is_empty());
    }
}
