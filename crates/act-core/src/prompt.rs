//! Prompt asking a language model for a loadable payload.
//!
//! The built-in template is in French, like the field names it asks for.
//! The intent is appended verbatim after the template.

/// Built-in instruction template. Ends right where the intent is inserted.
pub const PROMPT_TEMPLATE: &str = r#"Tu es une MACHINE D'ACTION À HAUT RENDEMENT.
Ta mission : à partir d'une intention, même vague, générer exclusivement une liste d'items d'action concrets, granulaires et prêts à exécuter.
Pas de texte stratégique, pas d'analyse : uniquement des éléments opérationnels.

CONTRAINTES :
1. Si l'intention est vide ou vague, pars de zéro et produis de la matière opérationnelle.
2. Ne crée pas de mails ni de réunions, sauf si l'entrée le demande explicitement ; dans ce cas, crée un item dédié.
3. Chaque item doit être exécutable immédiatement : verbe d'action clair, résultat attendu.
4. La sortie est du JSON strict selon le schéma ci-dessous.
5. Langue : français. Style : direct, impératif.

FORMAT DE SORTIE (JSON strict) :
{
  "seed_intent": "string (texte brut reçu)",
  "items": [
    {
      "id": "string court unique",
      "titre": "string",
      "description": "string (1-2 phrases)",
      "action": "string (verbe direct + objet)",
      "priorite": "haute | moyenne | basse",
      "effet_attendu": "string",
      "temps_estime_min": integer,
      "niveau_d_effort": "1 | 2 | 3",
      "dependances": ["id1", "id2"] | [],
      "tags": ["string", ...],
      "statut_suggere": "à faire | en cours | bloqué | fait",
      "suggested_next": "string (prochaine micro-action, 10 min max)"
    }
  ],
  "summary": "string (2-3 phrases : nombre d'items et quick wins)"
}

RÈGLES :
- Au moins 6 items, dont 2 quick wins faisables en 15 minutes ou moins.
- Mélange micro-actions (5-15 min) et petites tâches (30-90 min).
- N'écris jamais "voir", "penser", "réfléchir" ; écris "contacter", "rédiger", "tester", "mettre en ligne".
- Ajoute un tag pour chaque mot-clé explicite de l'intention (client, roadmap, recrutement...).
- Utilise des id courts : it-01, it-02, ...

ENTRÉE :
"#;

/// Built-in template followed by `intent`.
#[must_use]
pub fn build_prompt(intent: &str) -> String {
    build_prompt_with(PROMPT_TEMPLATE, intent)
}

/// `template` followed by `intent`, with exactly one line break between them.
#[must_use]
pub fn build_prompt_with(template: &str, intent: &str) -> String {
    let template = template.trim_end_matches(['\n', '\r']);
    format!("{template}\n{}", intent.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_lands_after_the_template() {
        let prompt = build_prompt("Lancer mon SaaS");
        assert!(prompt.starts_with("Tu es une MACHINE D'ACTION"));
        assert!(prompt.ends_with("ENTRÉE :\nLancer mon SaaS"));
    }

    #[test]
    fn empty_intent_is_allowed() {
        let prompt = build_prompt("   ");
        assert!(prompt.ends_with("ENTRÉE :\n"));
    }

    #[test]
    fn custom_template_is_joined_with_one_newline() {
        assert_eq!(build_prompt_with("Plan this:\n\n", "move house"), "Plan this:\nmove house");
    }

    #[test]
    fn template_documents_every_item_field() {
        for field in [
            "\"id\"",
            "\"titre\"",
            "\"priorite\"",
            "\"temps_estime_min\"",
            "\"niveau_d_effort\"",
            "\"dependances\"",
            "\"suggested_next\"",
            "\"seed_intent\"",
        ] {
            assert!(PROMPT_TEMPLATE.contains(field), "missing {field}");
        }
    }
}
