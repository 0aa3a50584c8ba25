//! Built-in taxonomy of Brazilian court filings.

use super::{CategoryConfig, Taxonomy, TaxonomyConfig};

/// (name, keywords, header patterns, pre-selected)
type Entry = (&'static str, &'static [&'static str], &'static [&'static str], bool);

// Réplica and Contrarrazões come before Defesa/Contestação and Recurso
// because their keywords contain the broader ones.
const LEGAL_CATEGORIES: &[Entry] = &[
    (
        "Petição Inicial",
        &["petição inicial", "peça inicial", "exordial"],
        &[r"^\s*peti[çc][ãa]o\s+inicial\b"],
        true,
    ),
    (
        "Contrarrazões",
        &["contrarrazões", "contra-razões", "contrarrazoes"],
        &[r"^\s*contra-?\s*raz[õo]es\b"],
        false,
    ),
    (
        "Réplica",
        &["réplica", "impugnação à contestação"],
        &[
            r"^\s*r[ée]plica\b",
            r"^\s*impugna[çc][ãa]o\s+[àa]\s+contesta[çc][ãa]o\b",
        ],
        false,
    ),
    (
        "Defesa/Contestação",
        &["contestação", "defesa"],
        &[r"^\s*contesta[çc][ãa]o\b", r"^\s*defesa\s+pr[ée]via\b"],
        true,
    ),
    (
        "Sentença",
        &["sentença"],
        &[r"^\s*senten[çc]a\b"],
        true,
    ),
    (
        "Acórdão",
        &["acórdão", "ementa"],
        &[r"^\s*ac[óo]rd[ãa]o\b", r"^\s*ementa\s*:"],
        true,
    ),
    (
        "Embargos de Declaração",
        &["embargos de declaração", "embargos declaratórios"],
        &[r"^\s*embargos\s+de\s+declara[çc][ãa]o\b"],
        false,
    ),
    (
        "Recurso",
        &["apelação", "agravo", "recurso"],
        &[
            r"^\s*recurso\s+(de\s+)?(apela[çc][ãa]o|especial|extraordin[áa]rio|inominado|ordin[áa]rio)\b",
            r"^\s*(raz[õo]es\s+de\s+)?apela[çc][ãa]o\b",
            r"^\s*agravo\s+(de\s+instrumento|interno|regimental)\b",
        ],
        true,
    ),
    (
        "Decisão Interlocutória",
        &["decisão interlocutória", "decisão"],
        &[r"^\s*decis[ãa]o(\s+interlocut[óo]ria)?\s*$"],
        false,
    ),
    (
        "Despacho",
        &["despacho"],
        &[r"^\s*despacho\s*$"],
        false,
    ),
    (
        "Ata de Audiência",
        &["ata de audiência", "termo de audiência", "audiência"],
        &[r"^\s*(ata|termo)\s+de\s+audi[êe]ncia\b"],
        false,
    ),
    (
        "Laudo Pericial",
        &["laudo pericial", "laudo", "perícia"],
        &[r"^\s*laudo(\s+pericial|\s+t[ée]cnico)?\b"],
        false,
    ),
    (
        "Procuração",
        &["procuração", "substabelecimento"],
        &[r"^\s*procura[çc][ãa]o\b", r"^\s*substabelecimento\b"],
        false,
    ),
    (
        "Certidão",
        &["certidão"],
        &[r"^\s*certid[ãa]o\b"],
        false,
    ),
    (
        "Manifestação",
        &["manifestação"],
        &[r"^\s*manifesta[çc][ãa]o\b"],
        false,
    ),
];

impl TaxonomyConfig {
    /// Definition of the built-in legal taxonomy, e.g. to export and edit.
    pub fn legal_default() -> Self {
        Self {
            categories: LEGAL_CATEGORIES
                .iter()
                .map(|&(name, keywords, patterns, preselected)| CategoryConfig {
                    name: name.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                    patterns: patterns.iter().map(|p| p.to_string()).collect(),
                    preselected,
                })
                .collect(),
        }
    }
}

pub(super) fn legal_default() -> Taxonomy {
    TaxonomyConfig::legal_default()
        .build()
        .expect("built-in taxonomy patterns are valid")
}
