// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted fallback replies.
//!
//! Served whenever no reply rule and no template qualifies. The reply for
//! a non-empty inbound message is never empty: every intent has a script,
//! and group threads share a single engagement script.

use responda_core::{Intent, ThreadType};

use crate::render::{ReplyContext, render};

/// Group fallback, regardless of intent.
const GROUP_FALLBACK: &str = "Se alguém quiser ativar um sistema automático, começa pelo {{product_name}} ({{product_price}}).\n➡️ {{site_url}}";

/// User-facing reply when the channel instance cannot be resolved.
pub const CONFIG_ERROR_REPLY: &str = "Configuração inválida. Contate o suporte.";

/// Automation disclosure appended in private threads for sensitive intents.
pub const DISCLOSURE: &str = "Obs: este atendimento é automático, feito pelo assistente {{agent_name}}.";

/// Scripted reply for a private thread, by intent.
fn private_script(intent: Intent) -> &'static str {
    match intent {
        Intent::Pricing => {
            "O {{product_name}} custa {{product_price}}. Quer ativar agora? O link é esse: {{site_url}}"
        }
        Intent::Catalog => {
            "Hoje o ponto de partida é o {{product_name}} ({{product_price}}). Quer ver como funciona?"
        }
        Intent::Support => "Me conta o que aconteceu que eu te ajudo a resolver.",
        Intent::HowItWorks => {
            "Funciona assim: você ativa o {{product_name}} e o sistema começa a responder por você. Quer que eu te mostre?"
        }
        Intent::Activation => {
            "Para ativar o {{product_name}} ({{product_price}}) é só entrar aqui: {{site_url}}"
        }
        Intent::Purchase => {
            "Fechado! O {{product_name}} sai por {{product_price}}. Garante o seu aqui: {{site_url}}"
        }
        Intent::Identity => {
            "Aqui é o assistente do {{agent_name}}. Posso te ajudar a ativar ou tirar qualquer dúvida."
        }
        Intent::LinkRequest => "Claro! O link é esse: {{site_url}}",
        Intent::GroupAccess => "Me passa seu melhor contato que eu te coloco no grupo.",
        Intent::Menu => {
            "Me diz o que você procura:\n1. Preço\n2. Como funciona\n3. Ativação\n4. Suporte"
        }
        Intent::GroupEngage | Intent::General => {
            "Me diz só uma coisa: você quer ativar agora ou entender melhor antes?"
        }
    }
}

/// Render the scripted fallback for `(intent, thread_type)`.
pub fn scripted_reply(intent: Intent, thread_type: ThreadType, ctx: &ReplyContext) -> String {
    let body = match thread_type {
        ThreadType::Group => GROUP_FALLBACK,
        ThreadType::Private => private_script(intent),
    };
    render(body, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

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
    fn every_intent_has_a_non_empty_private_script() {
        for intent in Intent::iter() {
            let reply = scripted_reply(intent, ThreadType::Private, &ctx());
            assert!(!reply.trim().is_empty(), "empty script for {intent}");
            assert!(!reply.contains("{{"), "unrendered placeholder for {intent}: {reply}");
        }
    }

    #[test]
    fn pricing_script_names_product_and_price() {
        let reply = scripted_reply(Intent::Pricing, ThreadType::Private, &ctx());
        assert!(reply.contains("Nível 1"));
        assert!(reply.contains("R$25"));
    }

    #[test]
    fn group_fallback_is_shared_across_intents() {
        let a = scripted_reply(Intent::Pricing, ThreadType::Group, &ctx());
        let b = scripted_reply(Intent::GroupEngage, ThreadType::Group, &ctx());
        assert_eq!(a, b);
        assert!(a.contains("https://example.test/"));
    }
}
