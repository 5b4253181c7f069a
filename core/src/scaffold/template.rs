pub const AGENT_MODEL: &str = "anthropic/claude-3-5-sonnet-20241022";
pub const AGENT_TEMPERATURE: &str = "0.1";

pub const AGENT_TEMPLATE: &str = r#"---
description: {description}
temperature: {temperature}
model: {model}
---

You are the **{name}**.

# Role
{description}

# Instructions
- [Add specific instructions here]

# Tools
- [List specific tools here]
"#;

/// Renders the agent document. Substitution is a single pass over the
/// template, so placeholders inside `name` or `description` stay literal.
pub fn render_agent(name: &str, description: &str) -> String {
    render(AGENT_TEMPLATE, |key| match key {
        "name" => Some(name),
        "description" => Some(description),
        "temperature" => Some(AGENT_TEMPERATURE),
        "model" => Some(AGENT_MODEL),
        _ => None,
    })
}

fn render<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let value = after
            .find('}')
            .and_then(|end| lookup(&after[..end]).map(|value| (value, end)));

        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_exact_document() {
        let expected = "---
description: Reviews pull requests
temperature: 0.1
model: anthropic/claude-3-5-sonnet-20241022
---

You are the **reviewer**.

# Role
Reviews pull requests

# Instructions
- [Add specific instructions here]

# Tools
- [List specific tools here]
";
        assert_eq!(render_agent("reviewer", "Reviews pull requests"), expected);
    }

    #[test]
    fn placeholders_in_values_are_not_expanded() {
        let doc = render_agent("{description}", "uses {name} literally");
        assert!(doc.contains("You are the **{description}**."));
        assert!(doc.contains("# Role\nuses {name} literally\n"));
    }

    #[test]
    fn unknown_braces_are_kept() {
        let out = render("a {x} {name", |key| (key == "x").then_some("1"));
        assert_eq!(out, "a 1 {name");
    }
}
