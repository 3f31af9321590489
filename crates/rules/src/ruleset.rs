use gastos_core::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of the ordered taxonomy: a category label and the keyword set
/// that claims a description for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("failed to parse rule TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("rule '{0}' has no keywords")]
    EmptyRule(String),
    #[error("rule list is empty")]
    NoRules,
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    rule: Vec<CategoryRule>,
}

/// Descriptions containing one of these (and matching no rule) are payments
/// or credits rather than uncategorizable spending.
const PAYMENT_KEYWORDS: [&str; 7] = [
    "pago",
    "pago recibido",
    "abono",
    "deposito",
    "transferencia",
    "reembolso",
    "devolucion",
];

/// An ordered, first-match-wins keyword classifier.
///
/// Rule order is part of the contract: keyword sets overlap across categories
/// ("oxxo gas" hits both the fuel and the convenience-store sets), so the
/// earlier rule always claims the description. Extend by appending, not
/// reordering.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl RuleSet {
    /// Keywords are normalized to lowercase once here; matching is
    /// case-insensitive substring containment.
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::NoRules);
        }
        let rules = rules
            .into_iter()
            .map(|rule| {
                if rule.keywords.is_empty() {
                    return Err(RuleError::EmptyRule(rule.category));
                }
                Ok(CategoryRule {
                    category: rule.category,
                    keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RuleSet { rules })
    }

    pub fn from_toml(toml_content: &str) -> Result<Self, RuleError> {
        let file: RuleFile = toml::from_str(toml_content)?;
        Self::new(file.rule)
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// First rule whose keyword set hits anywhere in the description wins;
    /// unmatched payment-like text falls to "Pagos y Abonos", the rest to
    /// "Otros". Pure and total: every description maps to exactly one label.
    pub fn classify(&self, description: &str) -> Category {
        let desc = description.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| desc.contains(k.as_str())) {
                return Category::new(rule.category.clone());
            }
        }
        if PAYMENT_KEYWORDS.iter().any(|k| desc.contains(k)) {
            Category::payments()
        } else {
            Category::uncategorized()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(category: &str, keywords: &[&str]) -> CategoryRule {
        CategoryRule {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        let rules = RuleSet::new(vec![
            rule("Gasolina", &["oxxo gas"]),
            rule("Conveniencia", &["oxxo"]),
        ])
        .unwrap();
        assert_eq!(rules.classify("OXXO GAS SATELITE").as_str(), "Gasolina");
        assert_eq!(rules.classify("OXXO PLAZA MAYOR").as_str(), "Conveniencia");
    }

    #[test]
    fn matching_is_case_insensitive_both_ways() {
        let rules = RuleSet::new(vec![rule("Amazon", &["AMAZON"])]).unwrap();
        assert_eq!(rules.classify("amazon mx").as_str(), "Amazon");
        assert_eq!(rules.classify("AMAZON MX").as_str(), "Amazon");
    }

    #[test]
    fn rule_beats_payment_sentinel() {
        // "pago" is only a fallback signal; an actual rule hit outranks it.
        let rules = RuleSet::new(vec![rule("Amazon", &["amazon"])]).unwrap();
        assert_eq!(rules.classify("PAGO AMAZON MX").as_str(), "Amazon");
    }

    #[test]
    fn unmatched_payment_text_falls_to_payments_sentinel() {
        let rules = RuleSet::new(vec![rule("Amazon", &["amazon"])]).unwrap();
        let c = rules.classify("PAGO RECIBIDO GRACIAS");
        assert!(c.is_payments());
    }

    #[test]
    fn unmatched_text_falls_to_otros() {
        let rules = RuleSet::new(vec![rule("Amazon", &["amazon"])]).unwrap();
        assert!(rules.classify("TLAPALERIA EL MARTILLO").is_uncategorized());
    }

    #[test]
    fn classify_is_idempotent() {
        let rules = crate::default_rules();
        for desc in ["UBER EATS MX", "PAGO RECIBIDO", "zzz", ""] {
            assert_eq!(rules.classify(desc), rules.classify(desc));
        }
    }

    #[test]
    fn empty_keyword_list_is_rejected() {
        let err = RuleSet::new(vec![rule("Vacia", &[])]).unwrap_err();
        assert!(matches!(err, RuleError::EmptyRule(c) if c == "Vacia"));
    }

    #[test]
    fn empty_rule_list_is_rejected() {
        assert!(matches!(RuleSet::new(vec![]), Err(RuleError::NoRules)));
    }

    #[test]
    fn from_toml_preserves_declaration_order() {
        let toml = r#"
            [[rule]]
            category = "Gasolina"
            keywords = ["oxxo gas"]

            [[rule]]
            category = "Conveniencia"
            keywords = ["oxxo"]
        "#;
        let rules = RuleSet::from_toml(toml).unwrap();
        assert_eq!(rules.rules()[0].category, "Gasolina");
        assert_eq!(rules.classify("oxxo gas norte").as_str(), "Gasolina");
    }

    #[test]
    fn from_toml_rejects_malformed_input() {
        assert!(matches!(RuleSet::from_toml("not toml ["), Err(RuleError::Toml(_))));
    }

    // ── default taxonomy ──────────────────────────────────────────────────────

    #[test]
    fn default_taxonomy_spot_checks() {
        let rules = crate::default_rules();
        assert_eq!(rules.classify("AMAZON MX MARKETPLACE").as_str(), "Amazon");
        assert_eq!(rules.classify("UBER EATS CDMX").as_str(), "Uber Eats");
        assert_eq!(rules.classify("NETFLIX.COM").as_str(), "Suscripciones Stream");
        assert_eq!(rules.classify("PEMEX 5542").as_str(), "Gasolina");
        assert_eq!(rules.classify("FARMACIA SAN PABLO").as_str(), "Farmacias");
        assert_eq!(rules.classify("CFE RECIBO LUZ").as_str(), "Gobierno");
    }

    #[test]
    fn default_taxonomy_order_resolves_overlaps() {
        let rules = crate::default_rules();
        // "oxxo gas" is in the fuel set, plain "oxxo" in convenience.
        assert_eq!(rules.classify("OXXO GAS ECHEGARAY").as_str(), "Gasolina");
        assert_eq!(rules.classify("OXXO ECHEGARAY").as_str(), "Conveniencia");
        // "restaurante" vs the department-store sets: first hit decides.
        assert_eq!(rules.classify("RESTAURANTE LIVERPOOL").as_str(), "Restaurantes");
    }

    #[test]
    fn default_taxonomy_payment_fallback() {
        let rules = crate::default_rules();
        assert!(rules.classify("SU PAGO GRACIAS").is_payments());
        assert!(rules.classify("TRANSFERENCIA SPEI").is_payments());
        assert!(rules.classify("GASTO DESCONOCIDO XYZ").is_uncategorized());
    }
}
