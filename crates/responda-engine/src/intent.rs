// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic intent classification.
//!
//! Case-insensitive substring/equality matching against a prioritized rule
//! list; the first satisfied rule wins. No scoring, no multi-label output,
//! no I/O. Every input maps to exactly one label from the closed set.

use responda_core::{Intent, ThreadType};

/// Digit shortcuts for the menu UX (exact match after trimming).
///
/// Only evaluated when the menu UX is enabled; "0" and "9" both re-open
/// the menu because both conventions show up in the wild.
const NUMERIC_SHORTCUTS: &[(&str, Intent)] = &[
    ("1", Intent::Pricing),
    ("2", Intent::HowItWorks),
    ("3", Intent::Activation),
    ("4", Intent::Support),
    ("0", Intent::Menu),
    ("9", Intent::Menu),
];

/// Keyword rules in evaluation order (contains, lowercase).
///
/// Order is load-bearing: "como funciona?" must classify as how_it_works
/// even though later rules would also fire on broader words.
const KEYWORD_RULES: &[(Intent, &[&str])] = &[
    (Intent::Pricing, &["preço", "preco", "valor", "quanto custa", "custa"]),
    (Intent::Catalog, &["catálogo", "catalogo", "produtos"]),
    (Intent::Support, &["suporte", "erro", "problema", "ajuda"]),
    (Intent::HowItWorks, &["funciona", "como"]),
    (Intent::Activation, &["ativar", "ativação", "ativacao"]),
    (Intent::Purchase, &["comprar", "quero", "pagar", "pagamento", "pix"]),
    (Intent::Identity, &["robô", "robo", "bot", "humano", "atendente"]),
    (Intent::LinkRequest, &["link", "site", "url"]),
    (Intent::GroupAccess, &["grupo", "entrar"]),
    (Intent::Menu, &["menu", "opções", "opcoes"]),
];

/// Classify a message into exactly one intent label.
///
/// `menu_enabled` switches on the numeric-shortcut rules and makes the
/// private-thread default `menu` instead of `general`. Group threads with
/// no match default to `group_engage`.
pub fn classify_intent(message: &str, thread_type: ThreadType, menu_enabled: bool) -> Intent {
    let text = message.trim().to_lowercase();

    if menu_enabled {
        for (shortcut, intent) in NUMERIC_SHORTCUTS {
            if text == *shortcut {
                return *intent;
            }
        }
    }

    for (intent, keywords) in KEYWORD_RULES {
        if keywords.iter().any(|k| text.contains(k)) {
            return *intent;
        }
    }

    match thread_type {
        ThreadType::Group => Intent::GroupEngage,
        ThreadType::Private if menu_enabled => Intent::Menu,
        ThreadType::Private => Intent::General,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_keywords() {
        for text in ["qual o preço?", "qual o PRECO", "quanto custa?", "tem valor fixo?"] {
            assert_eq!(
                classify_intent(text, ThreadType::Private, false),
                Intent::Pricing,
                "text: {text}"
            );
        }
    }

    #[test]
    fn catalog_keywords() {
        assert_eq!(
            classify_intent("me manda o catálogo", ThreadType::Private, false),
            Intent::Catalog
        );
        assert_eq!(
            classify_intent("quais produtos tem?", ThreadType::Private, false),
            Intent::Catalog
        );
    }

    #[test]
    fn support_keywords() {
        assert_eq!(
            classify_intent("deu erro aqui", ThreadType::Private, false),
            Intent::Support
        );
        assert_eq!(
            classify_intent("preciso de ajuda", ThreadType::Private, false),
            Intent::Support
        );
    }

    #[test]
    fn how_it_works_beats_activation_in_rule_order() {
        // "como ativar?" contains keywords of both rules; the earlier rule wins.
        assert_eq!(
            classify_intent("como ativar?", ThreadType::Private, false),
            Intent::HowItWorks
        );
        assert_eq!(
            classify_intent("isso funciona mesmo?", ThreadType::Private, false),
            Intent::HowItWorks
        );
    }

    #[test]
    fn activation_keywords() {
        assert_eq!(
            classify_intent("ativar", ThreadType::Private, false),
            Intent::Activation
        );
        assert_eq!(
            classify_intent("quero fazer a ativação", ThreadType::Private, false),
            Intent::Activation
        );
    }

    #[test]
    fn purchase_keywords() {
        assert_eq!(
            classify_intent("quero comprar", ThreadType::Private, false),
            Intent::Purchase
        );
        assert_eq!(
            classify_intent("aceita pix?", ThreadType::Private, false),
            Intent::Purchase
        );
    }

    #[test]
    fn identity_keywords() {
        assert_eq!(
            classify_intent("você é um robô?", ThreadType::Private, false),
            Intent::Identity
        );
        assert_eq!(
            classify_intent("quero falar com um humano", ThreadType::Private, false),
            Intent::Identity
        );
    }

    #[test]
    fn link_request_keywords() {
        assert_eq!(
            classify_intent("me passa o link", ThreadType::Private, false),
            Intent::LinkRequest
        );
    }

    #[test]
    fn group_access_keywords() {
        assert_eq!(
            classify_intent("posso entrar?", ThreadType::Private, false),
            Intent::GroupAccess
        );
    }

    #[test]
    fn menu_keywords() {
        assert_eq!(
            classify_intent("menu", ThreadType::Private, false),
            Intent::Menu
        );
        assert_eq!(
            classify_intent("quais as opções?", ThreadType::Private, false),
            Intent::Menu
        );
    }

    #[test]
    fn defaults_by_thread_type() {
        assert_eq!(
            classify_intent("bom dia", ThreadType::Private, false),
            Intent::General
        );
        assert_eq!(
            classify_intent("bom dia", ThreadType::Group, false),
            Intent::GroupEngage
        );
    }

    #[test]
    fn menu_ux_changes_private_default() {
        assert_eq!(
            classify_intent("bom dia", ThreadType::Private, true),
            Intent::Menu
        );
        // Groups keep their own default regardless of the menu UX.
        assert_eq!(
            classify_intent("bom dia", ThreadType::Group, true),
            Intent::GroupEngage
        );
    }

    #[test]
    fn numeric_shortcuts_only_when_menu_enabled() {
        assert_eq!(
            classify_intent(" 1 ", ThreadType::Private, true),
            Intent::Pricing
        );
        assert_eq!(
            classify_intent("2", ThreadType::Private, true),
            Intent::HowItWorks
        );
        assert_eq!(
            classify_intent("3", ThreadType::Private, true),
            Intent::Activation
        );
        assert_eq!(
            classify_intent("4", ThreadType::Private, true),
            Intent::Support
        );
        assert_eq!(classify_intent("0", ThreadType::Private, true), Intent::Menu);
        assert_eq!(classify_intent("9", ThreadType::Private, true), Intent::Menu);

        // With the menu UX off, a bare digit falls through to the default.
        assert_eq!(
            classify_intent("1", ThreadType::Private, false),
            Intent::General
        );
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                classify_intent("ativar", ThreadType::Group, false),
                Intent::Activation
            );
        }
    }

    #[test]
    fn every_input_yields_a_label() {
        // Totality: arbitrary junk still classifies.
        for text in ["", "🤖🤖🤖", "xyzzy", "\n\t", "ÀÉÎÕÜ"] {
            let _ = classify_intent(text, ThreadType::Private, false);
            let _ = classify_intent(text, ThreadType::Group, true);
        }
    }
}
