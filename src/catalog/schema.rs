//! Input schemas for every calculation kind.
//!
//! The registry below is the single source of truth for which fields each
//! calculation expects, their defaults, and the labels/descriptions the
//! presentation layer shows. Dispatch is a lookup over this table rather
//! than a per-form conditional.

use serde::Serialize;

use super::kinds::{CalculationKind, Category};

/// The value type of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FieldKind {
    /// A decimal currency amount (BRL).
    Currency,
    /// A whole-number count.
    Integer,
    /// A plain decimal number (hours, percentages given as whole numbers).
    Number,
    /// A calendar date (`YYYY-MM-DD`), no time-of-day.
    Date,
    /// One of a fixed set of string options.
    Choice {
        /// The accepted option tags.
        options: &'static [&'static str],
    },
}

/// Describes one input field of a calculation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    /// The field name used in the [`crate::models::InputRecord`].
    pub name: &'static str,
    /// Human label shown on the form (pt-BR).
    pub label: &'static str,
    /// The value type of the field.
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Default applied when the field is absent or unparseable.
    ///
    /// `None` means the general policy applies: numerics coerce to `0`,
    /// dates to an empty (zero-length) span.
    pub default: Option<&'static str>,
}

/// Catalog entry for one calculation kind.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalculationSpec {
    /// The kind this entry describes.
    pub kind: CalculationKind,
    /// Human label (pt-BR), as shown on the calculator card.
    pub label: &'static str,
    /// One-line description of what the calculation covers.
    pub description: &'static str,
    /// The legal category (calculator tab) this kind belongs to.
    pub category: Category,
    /// The input fields the calculation expects.
    pub fields: &'static [FieldSpec],
}

const SEVERANCE_PAY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "base_salary",
        label: "Salário Base",
        kind: FieldKind::Currency,
        default: None,
    },
    FieldSpec {
        name: "months_worked",
        label: "Meses Trabalhados",
        kind: FieldKind::Integer,
        default: None,
    },
    FieldSpec {
        name: "unused_vacation_periods",
        label: "Férias Vencidas",
        kind: FieldKind::Integer,
        default: None,
    },
    FieldSpec {
        name: "notice_type",
        label: "Aviso Prévio",
        kind: FieldKind::Choice {
            options: &["worked", "indemnified"],
        },
        default: Some("worked"),
    },
    FieldSpec {
        name: "termination_reason",
        label: "Motivo da Rescisão",
        kind: FieldKind::Choice {
            options: &[
                "without_cause",
                "with_cause",
                "resignation",
                "mutual_agreement",
            ],
        },
        default: Some("without_cause"),
    },
];

const OVERTIME_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "base_salary",
        label: "Salário Base",
        kind: FieldKind::Currency,
        default: None,
    },
    FieldSpec {
        name: "monthly_hours",
        label: "Horas Mensais",
        kind: FieldKind::Number,
        default: Some("220"),
    },
    FieldSpec {
        name: "overtime_hours",
        label: "Quantidade de Horas Extras",
        kind: FieldKind::Number,
        default: None,
    },
    FieldSpec {
        name: "premium_percent",
        label: "Percentual Adicional",
        kind: FieldKind::Choice {
            options: &["50", "100"],
        },
        default: Some("50"),
    },
];

const NIGHT_SHIFT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "base_salary",
        label: "Salário Base",
        kind: FieldKind::Currency,
        default: None,
    },
    FieldSpec {
        name: "night_hours",
        label: "Horas Noturnas",
        kind: FieldKind::Number,
        default: None,
    },
];

const UNHEALTHY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "minimum_wage",
        label: "Salário Mínimo de Referência",
        kind: FieldKind::Currency,
        default: Some("1412"),
    },
    FieldSpec {
        name: "degree_percent",
        label: "Grau de Insalubridade",
        kind: FieldKind::Choice {
            options: &["10", "20", "40"],
        },
        default: Some("20"),
    },
    FieldSpec {
        name: "months",
        label: "Meses de Exposição",
        kind: FieldKind::Integer,
        default: None,
    },
];

const HAZARD_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "base_salary",
        label: "Salário Base",
        kind: FieldKind::Currency,
        default: None,
    },
    FieldSpec {
        name: "months",
        label: "Meses de Exposição",
        kind: FieldKind::Integer,
        default: None,
    },
];

const MONETARY_CORRECTION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "original_value",
        label: "Valor Original",
        kind: FieldKind::Currency,
        default: None,
    },
    FieldSpec {
        name: "start_date",
        label: "Data Inicial",
        kind: FieldKind::Date,
        default: None,
    },
    FieldSpec {
        name: "end_date",
        label: "Data Final",
        kind: FieldKind::Date,
        default: None,
    },
    FieldSpec {
        name: "index",
        label: "Índice",
        kind: FieldKind::Choice {
            options: &["ipca", "inpc", "igpm", "selic"],
        },
        default: Some("ipca"),
    },
    FieldSpec {
        name: "monthly_interest_percent",
        label: "Juros ao Mês (%)",
        kind: FieldKind::Number,
        default: Some("1"),
    },
];

const ATTORNEY_FEES_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "case_value",
        label: "Valor da Causa",
        kind: FieldKind::Currency,
        default: None,
    },
    FieldSpec {
        name: "percent",
        label: "Percentual (%)",
        kind: FieldKind::Number,
        default: Some("10"),
    },
];

const CHILD_SUPPORT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "payer_monthly_income",
        label: "Rendimento Mensal",
        kind: FieldKind::Currency,
        default: None,
    },
    FieldSpec {
        name: "percent",
        label: "Percentual (%)",
        kind: FieldKind::Number,
        default: Some("30"),
    },
    FieldSpec {
        name: "child_count",
        label: "Quantidade de Filhos",
        kind: FieldKind::Integer,
        default: Some("1"),
    },
];

const ASSET_DIVISION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "total_assets",
        label: "Patrimônio Total",
        kind: FieldKind::Currency,
        default: None,
    },
    FieldSpec {
        name: "percent",
        label: "Percentual da Meação (%)",
        kind: FieldKind::Number,
        default: Some("50"),
    },
];

const CONTRIBUTION_TIME_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "start_date",
        label: "Data Inicial",
        kind: FieldKind::Date,
        default: None,
    },
    FieldSpec {
        name: "end_date",
        label: "Data Final",
        kind: FieldKind::Date,
        default: None,
    },
];

const CATALOG: &[CalculationSpec] = &[
    CalculationSpec {
        kind: CalculationKind::SeverancePay,
        label: "Verbas Rescisórias",
        description: "FGTS, aviso prévio, 13º, férias",
        category: Category::Labor,
        fields: SEVERANCE_PAY_FIELDS,
    },
    CalculationSpec {
        kind: CalculationKind::Overtime,
        label: "Horas Extras",
        description: "Adicional de 50% ou 100% com reflexo no DSR",
        category: Category::Labor,
        fields: OVERTIME_FIELDS,
    },
    CalculationSpec {
        kind: CalculationKind::NightShiftPremium,
        label: "Adicional Noturno",
        description: "20% sobre a hora normal e hora reduzida de 52min30s",
        category: Category::Labor,
        fields: NIGHT_SHIFT_FIELDS,
    },
    CalculationSpec {
        kind: CalculationKind::UnhealthyConditionsPremium,
        label: "Adicional de Insalubridade",
        description: "10%, 20% ou 40% do salário mínimo",
        category: Category::Labor,
        fields: UNHEALTHY_FIELDS,
    },
    CalculationSpec {
        kind: CalculationKind::HazardPremium,
        label: "Adicional de Periculosidade",
        description: "30% sobre o salário base",
        category: Category::Labor,
        fields: HAZARD_FIELDS,
    },
    CalculationSpec {
        kind: CalculationKind::MonetaryCorrection,
        label: "Correção Monetária",
        description: "IPCA, INPC, IGP-M ou SELIC mais juros de mora",
        category: Category::Civil,
        fields: MONETARY_CORRECTION_FIELDS,
    },
    CalculationSpec {
        kind: CalculationKind::AttorneyFees,
        label: "Honorários de Sucumbência",
        description: "10% a 20% do valor da causa",
        category: Category::Civil,
        fields: ATTORNEY_FEES_FIELDS,
    },
    CalculationSpec {
        kind: CalculationKind::ChildSupport,
        label: "Pensão Alimentícia",
        description: "Cálculo sobre rendimentos",
        category: Category::Family,
        fields: CHILD_SUPPORT_FIELDS,
    },
    CalculationSpec {
        kind: CalculationKind::AssetDivision,
        label: "Partilha de Bens",
        description: "Divisão do patrimônio",
        category: Category::Family,
        fields: ASSET_DIVISION_FIELDS,
    },
    CalculationSpec {
        kind: CalculationKind::ContributionTime,
        label: "Tempo de Contribuição",
        description: "Anos, meses e dias entre duas datas",
        category: Category::SocialSecurity,
        fields: CONTRIBUTION_TIME_FIELDS,
    },
];

/// Returns the full calculation catalog, in display order.
pub fn catalog() -> &'static [CalculationSpec] {
    CATALOG
}

/// Looks up the catalog entry for a calculation kind.
pub fn find_spec(kind: CalculationKind) -> &'static CalculationSpec {
    // CATALOG covers every enum variant; the test below keeps it honest.
    CATALOG
        .iter()
        .find(|spec| spec.kind == kind)
        .expect("catalog entry for every CalculationKind")
}
