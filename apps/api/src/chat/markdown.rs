/// Renders a model answer as a markdown blockquote.
/// `•` bullets become list items and every line, blank ones included, gets `> `.
pub fn to_markdown(text: &str) -> String {
    text.replace('•', "  *")
        .split_inclusive('\n')
        .map(|line| format!("> {line}"))
        .collect()
}
