//! The B2 → TPS → EB1 derivative adjustment scenario.
//!
//! Questions naming all three markers get vetted, hand-written answers
//! instead of whatever the rest of the pipeline would produce. Two
//! variants exist per language, picked by whether the question mentions a
//! long stretch without status.

use crate::lang::Language;
use crate::text::{contains_all, contains_any, normalize};

/// All three must appear in the normalised question.
pub const MARKERS: [&str; 3] = ["b2", "tps", "eb1"];

/// Phrases (already normalised) indicating a long period without status.
pub const LONG_DURATION_MARKERS: &[&str] = &[
    "3 ano",
    "tres ano",
    "mas de 180",
    "anos sin estatus",
    "anos sin status",
    "largo periodo",
    "largo tiempo",
    "mucho tiempo",
    "out of status for years",
    "years without status",
    "more than 180",
    "long period",
    "long time",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    LongDuration,
}

/// Classify an already-normalised question. `None` when it is not the
/// special case.
pub fn classify_normalized(normalized: &str) -> Option<Variant> {
    if !contains_all(normalized, &MARKERS) {
        return None;
    }
    Some(if contains_any(normalized, LONG_DURATION_MARKERS) {
        Variant::LongDuration
    } else {
        Variant::Default
    })
}

/// Classify a raw question.
pub fn classify(question: &str) -> Option<Variant> {
    classify_normalized(&normalize(question))
}

/// The curated answer for a language and variant.
pub fn curated_answer(language: Language, variant: Variant) -> &'static str {
    match (language, variant) {
        (Language::Es, Variant::Default) => CURATED_ES_DEFAULT,
        (Language::Es, Variant::LongDuration) => CURATED_ES_LONG,
        (Language::En, Variant::Default) => CURATED_EN_DEFAULT,
        (Language::En, Variant::LongDuration) => CURATED_EN_LONG,
    }
}

/// Knowledge-base question texts under which the curated answers are
/// registered.
pub const ENTRY_QUESTION_ES_DEFAULT: &str = "¿Una persona que entró legalmente a EEUU con visa de turista y luego obtuvo TPS puede ajustar status basado en ser beneficiario derivado de EB1?";
pub const ENTRY_QUESTION_ES_LONG: &str = "¿Una persona que entró legalmente a EEUU con visa de turista, estuvo años sin estatus y luego obtuvo TPS puede ajustar status como beneficiario derivado de EB1?";
pub const ENTRY_QUESTION_EN_DEFAULT: &str = "Can someone who entered with a B2 visa and later got TPS adjust status as an EB1 derivative beneficiary?";
pub const ENTRY_QUESTION_EN_LONG: &str = "Can someone who entered with a B2 visa, was out of status for years, and later got TPS adjust status as an EB1 derivative beneficiary?";

pub const CURATED_ES_DEFAULT: &str = "Para ajustar estatus como beneficiario derivado de EB1 después de una entrada legal con visa B2 y posterior TPS, se deben considerar varios factores:\n\n\
1. La entrada legal con visa B2 es favorable, ya que la persona fue inspeccionada y admitida legalmente.\n\n\
2. El período sin estatus entre el vencimiento de la visa B2 y la obtención del TPS puede ser perdonado bajo la sección 245(k) si fue menor a 180 días para casos de empleo como EB1.\n\n\
3. El TPS proporciona un estatus legal temporal y autorización de trabajo, pero no resuelve automáticamente períodos previos sin estatus.\n\n\
4. Para beneficiarios derivados de EB1 (cónyuges e hijos solteros menores de 21 años del beneficiario principal), aplican los mismos requisitos de admisibilidad.\n\n\
En resumen, es posible que esta persona pueda ajustar su estatus si el período sin estatus fue menor a 180 días o si califica para otras excepciones. Se recomienda consultar con un abogado especializado en inmigración para analizar todos los detalles específicos del caso.";

pub const CURATED_ES_LONG: &str = "Para una persona que estuvo sin estatus por más de 180 días antes de obtener TPS, el ajuste a EB1 como beneficiario derivado enfrenta obstáculos significativos:\n\n\
1. La entrada legal con visa B2 es favorable, ya que la persona fue inspeccionada y admitida legalmente.\n\n\
2. Sin embargo, la sección 245(k) solo perdona hasta 180 días sin estatus para casos de empleo como EB1, EB2 y EB3. Con un período más largo sin estatus (años), generalmente no se puede ajustar dentro de EE.UU. a través de categorías basadas en empleo.\n\n\
3. El TPS proporciona estatus legal temporal y autorización de trabajo, pero no elimina las barreras creadas por los largos períodos sin estatus antes de obtenerlo.\n\n\
4. Opciones alternativas podrían incluir:\n   \
- Proceso consular con perdón I-601 por presencia ilegal (implica salir de EE.UU.)\n   \
- Verificar elegibilidad bajo sección 245(i) si existe una petición anterior al 30 de abril de 2001\n   \
- Buscar otras bases para el ajuste como matrimonio con ciudadano, asilo o visa U\n\n\
5. Para beneficiarios derivados de EB1 (cónyuges e hijos solteros menores de 21 años), aplican los mismos requisitos de admisibilidad que para el beneficiario principal.\n\n\
Esta situación compleja requiere consulta con un abogado de inmigración especializado para evaluar todas las opciones disponibles según las circunstancias específicas.";

pub const CURATED_EN_DEFAULT: &str = "To adjust status as an EB1 derivative beneficiary after legal entry with a B2 visa and subsequent TPS, several factors must be considered:\n\n\
1. Legal entry with a B2 visa is favorable, as the person was inspected and legally admitted.\n\n\
2. The out-of-status period between the B2 visa expiration and obtaining TPS can be forgiven under section 245(k) if it was less than 180 days for employment-based cases like EB1.\n\n\
3. TPS provides temporary legal status and work authorization, but does not automatically resolve previous periods without status.\n\n\
4. For EB1 derivative beneficiaries (spouses and unmarried children under 21 of the principal beneficiary), the same admissibility requirements apply.\n\n\
In summary, this person may be able to adjust their status if the period without status was less than 180 days or if they qualify for other exceptions. It is recommended to consult with an immigration attorney to analyze all the specific details of the case.";

pub const CURATED_EN_LONG: &str = "For someone who was out of status for more than 180 days before obtaining TPS, adjustment to EB1 as a derivative beneficiary faces significant obstacles:\n\n\
1. Legal entry with a B2 visa is favorable, as the person was inspected and legally admitted.\n\n\
2. However, section 245(k) only forgives up to 180 days out of status for employment-based cases like EB1, EB2, and EB3. With a longer period out of status (years), one generally cannot adjust within the U.S. through employment-based categories.\n\n\
3. TPS provides temporary legal status and work authorization but does not eliminate the barriers created by long periods out of status before obtaining it.\n\n\
4. Alternative options might include:\n   \
- Consular processing with I-601 waiver for unlawful presence (requires leaving the U.S.)\n   \
- Checking eligibility under section 245(i) if a petition exists from before April 30, 2001\n   \
- Seeking other bases for adjustment such as marriage to a citizen, asylum, or U visa\n\n\
5. For EB1 derivative beneficiaries (spouses and unmarried children under 21), the same admissibility requirements apply as for the principal beneficiary.\n\n\
This complex situation requires consultation with a specialized immigration attorney to evaluate all available options based on the specific circumstances.";
