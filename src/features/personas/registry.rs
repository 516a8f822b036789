//! # Persona Registry
//!
//! Immutable mapping from persona id to role definition. Each persona has a
//! unique system prompt loaded from prompt/*.md files at compile time; the
//! one-line description doubles as the prefix for image prompts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::DispatchError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub system_prompt: String,
    pub description: String,
    /// Accent color for the result pane (0xRRGGBB)
    pub color: u32,
}

/// Registry of all personas, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: HashMap<String, Persona>,
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonaRegistry {
    pub fn new() -> Self {
        let mut personas = HashMap::new();

        // Prompts embedded at compile time; colors reflect each role's mood
        personas.insert(
            "director".to_string(),
            Persona {
                name: "Video Director".to_string(),
                system_prompt: include_str!("../../../prompt/director.md").to_string(),
                description:
                    "You guide film production, storytelling, scene composition, and camera work"
                        .to_string(),
                color: 0xC0392B, // Director's-chair red
            },
        );

        personas.insert(
            "dancer".to_string(),
            Persona {
                name: "Dance Instructor".to_string(),
                system_prompt: include_str!("../../../prompt/dancer.md").to_string(),
                description: "You teach movement, rhythm, and body expression in artistic ways"
                    .to_string(),
                color: 0xE67E22, // Stage-light amber
            },
        );

        personas.insert(
            "stylist".to_string(),
            Persona {
                name: "Fashion Stylist".to_string(),
                system_prompt: include_str!("../../../prompt/stylist.md").to_string(),
                description:
                    "You coordinate outfits, colors, and styles for various occasions"
                        .to_string(),
                color: 0xE91E63, // Runway pink
            },
        );

        personas.insert(
            "actor".to_string(),
            Persona {
                name: "Acting Coach".to_string(),
                system_prompt: include_str!("../../../prompt/actor.md").to_string(),
                description:
                    "You train performers in emotional expression, character development, and stage confidence"
                        .to_string(),
                color: 0x9B59B6, // Velvet-curtain purple
            },
        );

        personas.insert(
            "curator".to_string(),
            Persona {
                name: "Art Curator".to_string(),
                system_prompt: include_str!("../../../prompt/curator.md").to_string(),
                description:
                    "You interpret artworks and explain their aesthetic and emotional meaning"
                        .to_string(),
                color: 0x1ABC9C, // Gallery teal
            },
        );

        PersonaRegistry { personas }
    }

    pub fn get(&self, id: &str) -> Option<&Persona> {
        self.personas.get(id)
    }

    /// Total lookup: unknown ids become `UnknownPersona` instead of a panic.
    /// The selector only offers known ids, so this guards against drift
    /// between the choices table and the registry.
    pub fn lookup(&self, id: &str) -> Result<&Persona, DispatchError> {
        self.personas
            .get(id)
            .ok_or_else(|| DispatchError::UnknownPersona(id.to_string()))
    }

    pub fn list(&self) -> Vec<(&String, &Persona)> {
        self.personas.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::personas::PERSONA_CHOICES;

    #[test]
    fn test_registry_creation() {
        let registry = PersonaRegistry::new();
        assert!(registry.get("director").is_some());
        assert!(registry.get("dancer").is_some());
        assert!(registry.get("stylist").is_some());
        assert!(registry.get("actor").is_some());
        assert!(registry.get("curator").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_lookup_is_total() {
        let registry = PersonaRegistry::new();
        assert!(registry.lookup("curator").is_ok());

        let err = registry.lookup("poet").unwrap_err();
        assert!(matches!(err, DispatchError::UnknownPersona(ref id) if id == "poet"));
    }

    #[test]
    fn test_every_choice_resolves_with_nonempty_prompt() {
        let registry = PersonaRegistry::new();
        for (_, id) in PERSONA_CHOICES {
            let persona = registry.lookup(id).expect("choice should resolve");
            assert!(!persona.name.is_empty());
            assert!(!persona.description.is_empty());
            assert!(
                persona.system_prompt.len() > 100,
                "prompt for {id} should be substantial"
            );
            assert!(persona.color != 0, "persona {id} should have a color set");
        }
    }

    #[test]
    fn test_lookup_is_stable_across_calls() {
        let registry = PersonaRegistry::new();
        let first = registry.lookup("stylist").unwrap().system_prompt.clone();
        let second = registry.lookup("stylist").unwrap().system_prompt.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stylist_prompt_loaded() {
        let registry = PersonaRegistry::new();
        let stylist = registry.get("stylist").expect("stylist persona should exist");

        assert!(stylist.system_prompt.contains("fashion stylist"));
        assert!(stylist.system_prompt.contains("Occasion-Driven"));
        assert!(stylist.system_prompt.contains("Color Literate"));
    }

    #[test]
    fn test_director_prompt_loaded() {
        let registry = PersonaRegistry::new();
        let director = registry.get("director").expect("director persona should exist");

        assert!(director.system_prompt.contains("video director"));
        assert!(director.system_prompt.contains("Visual First"));
        assert!(director.system_prompt.contains("Story Above All"));
    }

    #[test]
    fn test_descriptions_match_role_voice() {
        // Descriptions are reused verbatim as the image prompt prefix, so
        // they must stay one-line role summaries.
        let registry = PersonaRegistry::new();
        for (_, persona) in registry.list() {
            assert!(persona.description.starts_with("You "));
            assert!(!persona.description.contains('\n'));
        }
    }
}
