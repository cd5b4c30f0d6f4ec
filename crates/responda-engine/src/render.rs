// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Placeholder rendering for reply bodies.
//!
//! Substitutes the fixed set of `{{name}}` placeholders in a single pass.
//! Unknown placeholders are left verbatim: a typo in a template body
//! degrades visibly instead of failing the decision.

/// Context values substituted into reply bodies.
#[derive(Debug, Clone, Default)]
pub struct ReplyContext {
    pub agent_name: String,
    pub sender_name: String,
    pub product_name: String,
    pub product_price: String,
    pub site_url: String,
}

impl ReplyContext {
    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "agent_name" => Some(&self.agent_name),
            "sender_name" => Some(&self.sender_name),
            "product_name" => Some(&self.product_name),
            "product_price" => Some(&self.product_price),
            "site_url" => Some(&self.site_url),
            _ => None,
        }
    }
}

/// Render a body, substituting known `{{placeholder}}` tokens.
///
/// Single pass over the input: substituted values are never re-scanned,
/// so a context value containing `{{` cannot trigger nested expansion.
pub fn render(body: &str, ctx: &ReplyContext) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        match after_open.find("}}") {
            Some(end) => {
                let key = &after_open[..end];
                match ctx.lookup(key.trim()) {
                    Some(value) => out.push_str(value),
                    None => {
                        // Unknown placeholder: keep the token verbatim.
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after_open[end + 2..];
            }
            None => {
                // Unterminated open marker: keep the tail as-is.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ReplyContext {
        ReplyContext {
            agent_name: "Clara".to_string(),
            sender_name: "João".to_string(),
            product_name: "Nível 1".to_string(),
            product_price: "R$25".to_string(),
            site_url: "https://example.test/".to_string(),
        }
    }

    #[test]
    fn substitutes_all_known_placeholders() {
        let body = "Oi {{sender_name}}! Aqui é {{agent_name}}. O {{product_name}} custa {{product_price}}: {{site_url}}";
        assert_eq!(
            render(body, &ctx()),
            "Oi João! Aqui é Clara. O Nível 1 custa R$25: https://example.test/"
        );
    }

    #[test]
    fn unknown_placeholders_stay_verbatim() {
        assert_eq!(render("valor: {{discount}}", &ctx()), "valor: {{discount}}");
    }

    #[test]
    fn unterminated_marker_is_kept() {
        assert_eq!(render("oi {{agent_name", &ctx()), "oi {{agent_name");
    }

    #[test]
    fn empty_body_renders_empty() {
        assert_eq!(render("", &ctx()), "");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let mut c = ctx();
        c.agent_name = "{{sender_name}}".to_string();
        assert_eq!(render("{{agent_name}}", &c), "{{sender_name}}");
    }

    #[test]
    fn whitespace_inside_braces_is_tolerated() {
        assert_eq!(render("{{ agent_name }}", &ctx()), "Clara");
    }
}
