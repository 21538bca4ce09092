//! Prompt construction for the completion backend.
//!
//! Every prompt embeds the attorney role, an explicit language directive
//! and the raw question. The B2/TPS/EB1 case gets structured analysis
//! instructions that differ by variant.

use crate::lang::Language;
use crate::special_case::Variant;

/// Prompt for the first attempt.
pub fn initial(question: &str, language: Language, special: Option<Variant>) -> String {
    match special {
        Some(variant) => special_case(question, language, variant),
        None => general(question, language),
    }
}

/// Terse, language-only prompt used for the single retry.
pub fn retry(question: &str, language: Language) -> String {
    match language {
        Language::Es => format!(
            "RESPONDE EXCLUSIVAMENTE EN ESPAÑOL. ESTO ES CRÍTICO.\n\n\
             Pregunta sobre inmigración: {question}\n\n\
             TU RESPUESTA (SOLO EN ESPAÑOL):"
        ),
        Language::En => format!(
            "RESPOND EXCLUSIVELY IN ENGLISH. THIS IS CRITICAL.\n\n\
             Immigration question: {question}\n\n\
             YOUR ANSWER (ONLY IN ENGLISH):"
        ),
    }
}

fn special_case(question: &str, language: Language, variant: Variant) -> String {
    let (head, instructions, tail) = match language {
        Language::Es => (
            "Como abogado de inmigración de EE.UU., responde SOLO EN ESPAÑOL a esta pregunta específica:",
            match variant {
                Variant::LongDuration => ES_LONG_INSTRUCTIONS,
                Variant::Default => ES_DEFAULT_INSTRUCTIONS,
            },
            "Respuesta:",
        ),
        Language::En => (
            "As a U.S. immigration attorney, answer ONLY IN ENGLISH to this specific question:",
            match variant {
                Variant::LongDuration => EN_LONG_INSTRUCTIONS,
                Variant::Default => EN_DEFAULT_INSTRUCTIONS,
            },
            "Response:",
        ),
    };
    format!("{head}\n\n{question}\n\n{instructions}\n\n{tail}")
}

fn general(question: &str, language: Language) -> String {
    match language {
        Language::Es => format!(
            "IMPORTANTE: RESPONDE ÚNICAMENTE EN ESPAÑOL.\n\n\
             Eres un abogado experto en inmigración de EE.UU. Responde a la siguiente pregunta sobre inmigración:\n\n\
             Pregunta: {question}\n\n\
             Instrucciones específicas:\n\
             1. RESPONDE SOLO EN ESPAÑOL de forma clara y detallada.\n\
             2. Analiza punto por punto los requisitos, las opciones disponibles y los riesgos del caso.\n\
             3. Menciona las secciones de la ley y los formularios aplicables cuando corresponda.\n\
             4. Resume al final con una respuesta clara (sí/no/quizás) y los pasos a seguir.\n\n\
             Respuesta en español:"
        ),
        Language::En => format!(
            "IMPORTANT: RESPOND ONLY IN ENGLISH.\n\n\
             You are a U.S. immigration attorney. Answer the following immigration question:\n\n\
             Question: {question}\n\n\
             Specific instructions:\n\
             1. RESPOND ONLY IN ENGLISH in a clear and detailed manner.\n\
             2. Analyze point by point the requirements, the available options and the risks of the case.\n\
             3. Mention the applicable sections of the law and forms where relevant.\n\
             4. Summarize at the end with a clear answer (yes/no/maybe) and next steps.\n\n\
             Response in English:"
        ),
    }
}

const ES_DEFAULT_INSTRUCTIONS: &str = "Explica si una persona que entró legalmente con visa B2, quedó sin estatus y luego obtuvo TPS, puede ajustar su estatus como beneficiario derivado de EB1.\n\n\
Para tu respuesta:\n\
1. La entrada legal con visa B2 es favorable porque la persona fue inspeccionada y admitida legalmente.\n\
2. El período sin estatus entre el vencimiento de la B2 y la obtención del TPS puede ser perdonado bajo sección 245(k) si fue menor a 180 días.\n\
3. TPS proporciona estatus legal temporal y autorización de trabajo, pero no resuelve automáticamente períodos previos sin estatus.\n\
4. Para beneficiarios derivados de EB1 aplican los mismos requisitos de admisibilidad.\n\
5. Es posible ajustar estatus si el período sin estatus fue menor a 180 días o califica para excepciones.";

const ES_LONG_INSTRUCTIONS: &str = "Explica las dificultades y alternativas para una persona que entró legalmente con visa B2, estuvo SIN ESTATUS POR UN LARGO PERÍODO (AÑOS) y luego obtuvo TPS, que ahora quiere ajustar su estatus como beneficiario derivado de EB1.\n\n\
Para tu respuesta:\n\
1. Sé claro en que la sección 245(k) NO es aplicable porque SOLO perdona hasta 180 días sin estatus.\n\
2. Con un período tan largo sin estatus, el ajuste dentro de EE.UU. será difícil o imposible.\n\
3. Menciona alternativas como la sección 245(i), perdones por dificultad extrema, o procesamiento consular.\n\
4. Sé concreto sobre las dificultades pero presenta todas las opciones posibles.\n\
5. Enfatiza la importancia de consultar con un abogado para este caso complejo.";

const EN_DEFAULT_INSTRUCTIONS: &str = "Explain if someone who entered legally with a B2 visa, went out of status and then obtained TPS, can adjust their status as an EB1 derivative beneficiary.\n\n\
For your answer:\n\
1. Legal entry with a B2 visa is favorable because the person was inspected and legally admitted.\n\
2. The period without status between the B2 expiration and obtaining TPS can be forgiven under section 245(k) if less than 180 days.\n\
3. TPS provides temporary legal status and work authorization, but doesn't automatically resolve previous periods without status.\n\
4. For EB1 derivative beneficiaries, the same admissibility requirements apply.\n\
5. It's possible to adjust status if the period without status was less than 180 days or qualifies for exceptions.";

const EN_LONG_INSTRUCTIONS: &str = "Explain the challenges and alternatives for someone who entered legally with a B2 visa, was OUT OF STATUS FOR A LONG PERIOD (YEARS), then obtained TPS, and now wants to adjust status as an EB1 derivative beneficiary.\n\n\
For your answer:\n\
1. Be clear that section 245(k) is NOT applicable because it ONLY forgives up to 180 days out of status.\n\
2. With such a long period out of status, adjustment within the U.S. will be difficult or impossible.\n\
3. Mention alternatives like section 245(i), extreme hardship waivers, or consular processing.\n\
4. Be concrete about the challenges but present all possible options.\n\
5. Emphasize the importance of consulting with an attorney for this complex case.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_prompt_embeds_question_and_directive() {
        let p = initial("¿Puedo pedir asilo?", Language::Es, None);
        assert!(p.starts_with("IMPORTANTE: RESPONDE ÚNICAMENTE EN ESPAÑOL."));
        assert!(p.contains("Pregunta: ¿Puedo pedir asilo?"));
        assert!(p.ends_with("Respuesta en español:"));

        let p = initial("Can I apply for asylum?", Language::En, None);
        assert!(p.contains("You are a U.S. immigration attorney"));
        assert!(p.ends_with("Response in English:"));
    }

    #[test]
    fn special_case_prompt_varies_by_variant() {
        let q = "b2 tps eb1";
        let default = initial(q, Language::Es, Some(Variant::Default));
        let long = initial(q, Language::Es, Some(Variant::LongDuration));
        assert!(default.contains("puede ser perdonado bajo sección 245(k)"));
        assert!(long.contains("NO es aplicable"));
        assert!(long.ends_with("Respuesta:"));
        assert!(initial(q, Language::En, Some(Variant::LongDuration)).ends_with("Response:"));
    }

    #[test]
    fn retry_prompt_is_terse() {
        let p = retry("What is TPS?", Language::En);
        assert_eq!(
            p,
            "RESPOND EXCLUSIVELY IN ENGLISH. THIS IS CRITICAL.\n\nImmigration question: What is TPS?\n\nYOUR ANSWER (ONLY IN ENGLISH):"
        );
        assert!(retry("¿Qué es TPS?", Language::Es).starts_with("RESPONDE EXCLUSIVAMENTE EN ESPAÑOL."));
    }
}
