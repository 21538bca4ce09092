//! Keyword-triggered canned answers.
//!
//! Rules are scanned in declaration order and the first trigger found in
//! the lowercased question wins, so a specific trigger must come before any
//! broader one that would also match its questions. Diacritics are not
//! folded here: `ciudadanía` and `ciudadania` are different triggers.

use crate::lang::{Language, Localized};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub trigger: &'static str,
    pub answer: Localized,
}

/// Answer used when no trigger matches: who the assistant is and what it
/// covers.
pub const ASSISTANT_DISCLAIMER: Localized = Localized {
    es: "Soy IA MIGRANTE, un asistente virtual para temas de inmigración. Puedo proporcionar información general sobre visas, asilo, permisos de trabajo, reunificación familiar y otros temas relacionados con inmigración. Para obtener asesoramiento legal específico sobre su caso, le recomendamos consultar con un abogado de inmigración calificado.",
    en: "I am IA MIGRANTE, a virtual assistant for immigration topics. I can provide general information about visas, asylum, work permits, family reunification and other immigration-related topics. For specific legal advice about your case, we recommend consulting a qualified immigration attorney.",
};

/// What [`KeywordResponder::respond`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordReply {
    pub text: &'static str,
    /// Trigger of the matching rule; `None` for the disclaimer.
    pub trigger: Option<&'static str>,
}

pub struct KeywordResponder {
    rules: Vec<KeywordRule>,
}

impl KeywordResponder {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Responder over [`DEFAULT_RULES`].
    pub fn builtin() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }

    /// First rule whose trigger occurs in the lowercased question.
    pub fn matching(&self, question: &str) -> Option<&KeywordRule> {
        let lower = question.to_lowercase();
        self.rules.iter().find(|r| lower.contains(r.trigger))
    }

    /// Matching answer in `language`, or the assistant disclaimer. Never
    /// empty.
    pub fn respond(&self, question: &str, language: Language) -> KeywordReply {
        match self.matching(question) {
            Some(rule) => KeywordReply { text: rule.answer.get(language), trigger: Some(rule.trigger) },
            None => KeywordReply { text: ASSISTANT_DISCLAIMER.get(language), trigger: None },
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

const fn rule(trigger: &'static str, es: &'static str, en: &'static str) -> KeywordRule {
    KeywordRule { trigger, answer: Localized { es, en } }
}

pub const DEFAULT_RULES: &[KeywordRule] = &[
    // visas
    rule(
        "visa",
        "Para obtener información sobre visas, debe consultar el sitio web oficial de la embajada o consulado del país al que desea viajar. Cada país tiene requisitos específicos para diferentes tipos de visas (turismo, trabajo, estudio, etc.). Es importante presentar una solicitud completa con toda la documentación requerida y con suficiente antelación al viaje planeado.",
        "For information about visas, check the official website of the embassy or consulate of the country you want to travel to. Each country has specific requirements for different visa types (tourism, work, study, etc.). It is important to submit a complete application with all required documentation well ahead of your planned trip.",
    ),
    // work
    rule(
        "trabajo",
        "Las visas de trabajo generalmente requieren una oferta de empleo de un empleador en el país de destino. El empleador puede necesitar demostrar que no hay ciudadanos o residentes cualificados para el puesto. Dependiendo del país, puede haber diferentes categorías de visas de trabajo, como para trabajadores altamente cualificados, temporales o estacionales. El proceso suele incluir verificaciones de antecedentes y, en algunos casos, exámenes médicos.",
        "Work visas generally require a job offer from an employer in the destination country. The employer may need to show that no qualified citizens or residents are available for the position. Depending on the country, there may be different categories of work visas, such as for highly skilled, temporary or seasonal workers. The process usually includes background checks and, in some cases, medical exams.",
    ),
    rule(
        "h1b",
        "La visa H-1B es un visado temporal de trabajo para EE.UU. destinado a profesionales en ocupaciones especializadas. Requiere un patrocinador empleador, título universitario relevante o experiencia equivalente, y está sujeta a un límite anual. Si desea cambiar de empleador, generalmente necesitará que el nuevo empleador presente una nueva petición H-1B antes de cambiar de trabajo.",
        "The H-1B is a temporary U.S. work visa for professionals in specialty occupations. It requires an employer sponsor, a relevant university degree or equivalent experience, and is subject to an annual cap. If you want to change employers, the new employer generally needs to file a new H-1B petition before you switch jobs.",
    ),
    rule(
        "h2a",
        "La visa H-2A permite a trabajadores agrícolas extranjeros trabajar temporalmente en EE.UU. Los empleadores deben demostrar que no hay suficientes trabajadores estadounidenses disponibles y que la contratación no afectará negativamente los salarios locales. Incluye requisitos como vivienda, transporte y garantía de empleo por al menos 75% del período contratado.",
        "The H-2A visa lets foreign agricultural workers work temporarily in the U.S. Employers must show that not enough U.S. workers are available and that hiring will not adversely affect local wages. It includes requirements such as housing, transportation and an employment guarantee for at least 75% of the contract period.",
    ),
    rule(
        "h2b",
        "La visa H-2B permite a empleadores estadounidenses contratar trabajadores extranjeros para empleos temporales no agrícolas. Está sujeta a un límite anual y requiere demostrar que no hay trabajadores estadounidenses disponibles. Los trabajos deben ser de naturaleza temporal (necesidad única, estacional, demanda pico o intermitente).",
        "The H-2B visa lets U.S. employers hire foreign workers for temporary non-agricultural jobs. It is subject to an annual cap and requires showing that no U.S. workers are available. The jobs must be temporary in nature (one-time, seasonal, peak-load or intermittent need).",
    ),
    rule(
        "l1",
        "La visa L-1 permite a empresas multinacionales transferir ejecutivos, gerentes o empleados con conocimientos especializados a sus oficinas en EE.UU. La L-1A (para ejecutivos/gerentes) puede durar hasta 7 años, mientras que la L-1B (conocimiento especializado) hasta 5 años. Requiere que el solicitante haya trabajado para la empresa en el extranjero por al menos 1 año en los últimos 3 años.",
        "The L-1 visa lets multinational companies transfer executives, managers or employees with specialized knowledge to their U.S. offices. The L-1A (executives/managers) can last up to 7 years, while the L-1B (specialized knowledge) lasts up to 5 years. The applicant must have worked for the company abroad for at least 1 year within the last 3 years.",
    ),
    rule(
        "o1",
        "La visa O-1 está destinada a personas con habilidades extraordinarias en ciencias, artes, educación, negocios o deportes. Requiere demostrar reconocimiento nacional o internacional en su campo a través de premios, publicaciones, contribuciones significativas u otros criterios específicos. No tiene límite anual y puede permitir estadías de hasta 3 años con posibles extensiones.",
        "The O-1 visa is for people with extraordinary ability in the sciences, arts, education, business or athletics. It requires showing national or international recognition in the field through awards, publications, significant contributions or other specific criteria. There is no annual cap and stays of up to 3 years are possible, with extensions.",
    ),
    rule(
        "permiso trabajo",
        "Los permisos de trabajo son documentos que autorizan legalmente a extranjeros a trabajar en un país. Los requisitos y procesos para obtenerlos varían significativamente según el país. Generalmente, se necesita una oferta de trabajo válida, documentación personal, y en algunos casos, demostrar calificaciones específicas. La duración y condiciones del permiso dependen del tipo de programa migratorio y las políticas del país.",
        "Work permits are documents that legally authorize foreigners to work in a country. Requirements and processes vary significantly by country. Generally you need a valid job offer, personal documentation and, in some cases, proof of specific qualifications. The duration and conditions of the permit depend on the type of immigration program and the country's policies.",
    ),
    // study
    rule(
        "estudiante",
        "Las visas de estudiante requieren generalmente una carta de aceptación de una institución educativa reconocida, prueba de fondos suficientes para mantenerse durante los estudios, y a veces un seguro médico. Muchos países permiten a los estudiantes trabajar parcialmente durante sus estudios y ofrecen períodos posteriores para buscar empleo. Es importante mantener un estatus académico completo para conservar la validez de la visa.",
        "Student visas generally require an acceptance letter from a recognized educational institution, proof of sufficient funds to support yourself during your studies and sometimes health insurance. Many countries let students work part time during their studies and offer a period afterwards to look for employment. Maintaining full-time academic status is important to keep the visa valid.",
    ),
    rule(
        "f1",
        "La visa F-1 es para estudiantes académicos en EE.UU. Requiere aceptación en un programa a tiempo completo, prueba de capacidad financiera y vínculos con el país de origen. Permite trabajo en campus y, después del primer año, posibles prácticas profesionales (CPT/OPT). Tras graduarse, es posible solicitar OPT por 12 meses (extendible a 36 meses para campos STEM).",
        "The F-1 visa is for academic students in the U.S. It requires admission to a full-time program, proof of financial means and ties to your home country. It allows on-campus work and, after the first year, possible practical training (CPT/OPT). After graduating you can apply for 12 months of OPT (extendable to 36 months for STEM fields).",
    ),
    rule(
        "j1",
        "La visa J-1 es para participantes en programas de intercambio en EE.UU., incluyendo estudiantes, investigadores, profesores, au pairs y médicos. Muchos programas J-1 tienen un requisito de residencia de dos años en el país de origen tras completar el programa. Permite empleo relacionado con el programa de intercambio con aprobación previa del patrocinador.",
        "The J-1 visa is for exchange program participants in the U.S., including students, researchers, professors, au pairs and physicians. Many J-1 programs carry a two-year home-country residence requirement after the program ends. It allows employment related to the exchange program with prior sponsor approval.",
    ),
    // permanent residence
    rule(
        "residencia permanente",
        "La residencia permanente otorga el derecho a vivir y trabajar indefinidamente en un país. Los caminos para obtenerla incluyen patrocinio familiar, empleo, inversión, asilo o programas especiales. Los requisitos generalmente incluyen buen carácter moral, ausencia de antecedentes penales graves, y a veces, conocimiento del idioma y cultura local. El proceso puede tomar desde meses hasta varios años dependiendo del país y la categoría.",
        "Permanent residence grants the right to live and work in a country indefinitely. Paths to it include family sponsorship, employment, investment, asylum or special programs. Requirements generally include good moral character, no serious criminal record and sometimes knowledge of the local language and culture. The process can take from months to several years depending on the country and category.",
    ),
    rule(
        "green card",
        "La Green Card (Tarjeta de Residente Permanente) otorga residencia permanente legal en EE.UU. Puede obtenerse a través de familia, empleo, la lotería de visas, asilo o programas especiales. El proceso generalmente incluye una petición, solicitud de ajuste de estatus o proceso consular, revisión de antecedentes y entrevista. Los titulares pueden vivir y trabajar permanentemente en EE.UU. y solicitar la ciudadanía después de 3-5 años.",
        "The Green Card (Permanent Resident Card) grants lawful permanent residence in the U.S. It can be obtained through family, employment, the diversity visa lottery, asylum or special programs. The process generally includes a petition, an adjustment of status application or consular processing, a background check and an interview. Holders can live and work permanently in the U.S. and apply for citizenship after 3-5 years.",
    ),
    rule(
        "express entry",
        "Express Entry es el sistema de inmigración de Canadá para trabajadores cualificados. Gestiona solicitudes para programas federales como el Programa de Trabajadores Calificados, Oficios Especializados y Experiencia Canadiense. Los candidatos reciben puntuaciones basadas en edad, educación, experiencia laboral e idioma, y los de mayor puntuación reciben invitaciones para solicitar residencia permanente.",
        "Express Entry is Canada's immigration system for skilled workers. It manages applications for federal programs such as the Federal Skilled Worker Program, the Federal Skilled Trades Program and the Canadian Experience Class. Candidates are scored on age, education, work experience and language, and the highest-scoring ones receive invitations to apply for permanent residence.",
    ),
    rule(
        "arraigo",
        "El arraigo es un proceso en España que permite a extranjeros en situación irregular obtener residencia legal si demuestran ciertos vínculos con el país. Hay tres tipos: laboral (2+ años en España, 6+ meses trabajando), social (3+ años en España, contrato laboral, vínculos familiares o informe de integración) y familiar (ser padre de español o hijo de originalmente español). Cada tipo tiene requisitos específicos de documentación.",
        "Arraigo is a Spanish procedure that lets foreigners in irregular status obtain legal residence if they show certain ties to the country. There are three types: labor (2+ years in Spain, 6+ months working), social (3+ years in Spain, an employment contract, family ties or an integration report) and family (being the parent of a Spanish national or the child of someone originally Spanish). Each type has specific documentation requirements.",
    ),
    // asylum and protection
    rule(
        "asilo",
        "El asilo se otorga a personas que tienen un temor fundado de persecución en su país de origen por motivos de raza, religión, nacionalidad, opinión política o pertenencia a un grupo social particular. El proceso generalmente implica una solicitud formal, entrevistas, y evaluación de evidencias. Durante el trámite, muchos países proporcionan autorización de trabajo temporal. Es importante buscar asesoramiento legal para el proceso de solicitud.",
        "Asylum is granted to people with a well-founded fear of persecution in their home country based on race, religion, nationality, political opinion or membership in a particular social group. The process generally involves a formal application, interviews and an evaluation of evidence. While the case is pending, many countries provide temporary work authorization. Seeking legal advice for the application process is important.",
    ),
    rule(
        "refugiado",
        "El estatus de refugiado se otorga a personas que han huido de su país debido a persecución, guerra o violencia. A diferencia del asilo (solicitado dentro del país de destino), el estatus de refugiado suele solicitarse desde fuera del país donde se busca protección, a menudo a través de ACNUR. Los refugiados reconocidos reciben protección legal, asistencia para necesidades básicas, y eventualmente, posibilidades de integración o reasentamiento.",
        "Refugee status is granted to people who have fled their country because of persecution, war or violence. Unlike asylum (requested inside the destination country), refugee status is usually requested from outside the country where protection is sought, often through UNHCR. Recognized refugees receive legal protection, help with basic needs and, eventually, integration or resettlement options.",
    ),
    rule(
        "protección temporal",
        "La Protección Temporal es un estatus que brinda refugio a corto plazo a personas desplazadas por conflictos, violencia o desastres. El Estatus de Protección Temporal (TPS) en EE.UU. se designa para países específicos enfrentando condiciones extraordinarias, permitiendo a sus nacionales permanecer y trabajar legalmente por períodos definidos. Las designaciones actuales incluyen países como Venezuela, Haití, Somalia, Sudán, entre otros, y se renuevan periódicamente.",
        "Temporary Protection is a status that offers short-term refuge to people displaced by conflict, violence or disasters. Temporary Protected Status (TPS) in the U.S. is designated for specific countries facing extraordinary conditions, letting their nationals stay and work legally for defined periods. Current designations include countries such as Venezuela, Haiti, Somalia and Sudan, among others, and are renewed periodically.",
    ),
    rule(
        "tps",
        "El Estatus de Protección Temporal (TPS) es un programa de EE.UU. que permite a nacionales de países designados permanecer temporalmente debido a conflictos, desastres naturales u otras condiciones extraordinarias. Proporciona protección contra la deportación y autorización de trabajo. Las designaciones son temporales pero pueden renovarse. Actualmente incluye países como Venezuela, Haití, El Salvador, Honduras, Nepal, Nicaragua, Somalia, Sudán, Sudán del Sur, Siria y Yemen, aunque esto puede cambiar.",
        "Temporary Protected Status (TPS) is a U.S. program that lets nationals of designated countries remain temporarily because of conflict, natural disasters or other extraordinary conditions. It provides protection from deportation and work authorization. Designations are temporary but can be renewed. It currently includes countries such as Venezuela, Haiti, El Salvador, Honduras, Nepal, Nicaragua, Somalia, Sudan, South Sudan, Syria and Yemen, although this can change.",
    ),
    // family
    rule(
        "familia",
        "La reunificación familiar permite a ciertos residentes legales y ciudadanos patrocinar a familiares para inmigrar. Los familiares elegibles generalmente incluyen cónyuges, hijos, padres y, en algunos casos, hermanos. El patrocinador debe demostrar capacidad financiera para mantener a los familiares. Los tiempos de procesamiento varían significativamente según el país, la relación familiar y las cuotas anuales. En muchos casos, existe un sistema de preferencias con tiempos de espera diferentes.",
        "Family reunification lets certain legal residents and citizens sponsor relatives to immigrate. Eligible relatives generally include spouses, children, parents and, in some cases, siblings. The sponsor must show the financial means to support them. Processing times vary significantly by country, family relationship and annual quotas. In many cases there is a preference system with different waiting times.",
    ),
    rule(
        "cónyuge",
        "Las visas o permisos para cónyuges permiten la reunificación de parejas legalmente casadas. El patrocinador debe ser ciudadano o residente legal y generalmente debe demostrar que el matrimonio es genuino y no con fines migratorios. En muchos países, este proceso incluye entrevistas, evidencia de la relación y, en algunos casos, requisitos de ingresos mínimos. Algunos países también reconocen uniones civiles o parejas de hecho para la inmigración.",
        "Spousal visas or permits allow legally married couples to reunite. The sponsor must be a citizen or legal resident and generally must show that the marriage is genuine and not entered into for immigration purposes. In many countries the process includes interviews, evidence of the relationship and, in some cases, minimum income requirements. Some countries also recognize civil unions or domestic partnerships for immigration.",
    ),
    rule(
        "matrimonio",
        "La inmigración basada en matrimonio permite a ciudadanos o residentes permanentes patrocinar a sus cónyuges extranjeros. El proceso suele incluir una petición inicial, evidencia de matrimonio genuino (fotos, comunicaciones, testimonio de testigos), documentación personal, revisión de antecedentes, examen médico y una entrevista. Las autoridades evalúan cuidadosamente que no sea un matrimonio fraudulento. En algunos países, se emite primero una residencia condicional por 2 años.",
        "Marriage-based immigration lets citizens or permanent residents sponsor their foreign spouses. The process usually includes an initial petition, evidence of a genuine marriage (photos, communications, witness statements), personal documents, a background check, a medical exam and an interview. Authorities check carefully that the marriage is not fraudulent. In some countries a 2-year conditional residence is issued first.",
    ),
    rule(
        "padres",
        "La inmigración de padres varía según el país. En EE.UU., ciudadanos mayores de 21 años pueden patrocinar a sus padres como familiares inmediatos, sin límites numéricos. En Canadá, existe el Programa de Padres y Abuelos con cupos limitados. España permite reunificación tras un año de residencia legal. Australia ofrece visas de padres con opciones contributivas y no contributivas. Todos requieren demostrar capacidad financiera para mantener a los padres patrocinados.",
        "Immigration for parents varies by country. In the U.S., citizens over 21 can sponsor their parents as immediate relatives with no numerical limit. Canada has the Parents and Grandparents Program with limited spots. Spain allows reunification after one year of legal residence. Australia offers parent visas with contributory and non-contributory options. All of them require showing the financial means to support the sponsored parents.",
    ),
    rule(
        "hijos",
        "La inmigración de hijos generalmente tiene prioridad en sistemas de reunificación familiar. Para hijos menores, el proceso suele ser más rápido y directo. Para hijos adultos, muchos países tienen restricciones de edad y pueden requerir demostrar dependencia económica. Documentos importantes incluyen certificados de nacimiento, prueba de custodia legal (en caso de padres divorciados), y a veces pruebas de ADN si la documentación es insuficiente.",
        "Immigration for children generally has priority in family reunification systems. For minor children the process is usually faster and more direct. For adult children, many countries have age restrictions and may require proof of financial dependence. Important documents include birth certificates, proof of legal custody (for divorced parents) and sometimes DNA tests if documentation is insufficient.",
    ),
    // citizenship
    rule(
        "ciudadanía",
        "Los requisitos para la ciudadanía generalmente incluyen un período de residencia legal (típicamente 3-5 años), conocimiento del idioma y de la historia/gobierno del país, buen carácter moral (sin antecedentes penales significativos), y aprobar un examen de ciudadanía. El proceso incluye solicitud, biométricos, entrevista y ceremonia de juramento. Muchos países permiten la doble ciudadanía, pero no todos, por lo que es importante verificar si renunciar a la ciudadanía original es necesario.",
        "Citizenship requirements generally include a period of legal residence (typically 3-5 years), knowledge of the country's language and history/government, good moral character (no significant criminal record) and passing a citizenship test. The process includes an application, biometrics, an interview and an oath ceremony. Many countries allow dual citizenship, but not all, so it is important to check whether renouncing your original citizenship is required.",
    ),
    rule(
        "naturalización",
        "La naturalización es el proceso legal por el cual un extranjero adquiere la ciudadanía. Los requisitos típicos incluyen: residencia legal por un período específico (generalmente 3-7 años), conocimiento del idioma, historia y sistema político, buen carácter moral, y juramento de lealtad. Se requiere presentar documentación completa, pagar tarifas, asistir a una entrevista y, en la mayoría de los casos, aprobar un examen. Tras la aprobación, se participa en una ceremonia de ciudadanía.",
        "Naturalization is the legal process by which a foreign national acquires citizenship. Typical requirements include legal residence for a specific period (usually 3-7 years), knowledge of the language, history and political system, good moral character and an oath of allegiance. You must submit complete documentation, pay fees, attend an interview and, in most cases, pass a test. After approval you take part in a citizenship ceremony.",
    ),
    rule(
        "doble nacionalidad",
        "La doble nacionalidad permite a una persona ser ciudadana de dos países simultáneamente. No todos los países la permiten; algunos exigen renunciar a la ciudadanía anterior al naturalizarse, mientras que otros la aceptan plenamente. Países como EE.UU., Canadá, Reino Unido, Australia, México y la mayoría de países de la UE aceptan la doble nacionalidad. Es importante verificar las leyes específicas tanto del país de origen como del país de naturalización para evitar perder derechos o incurrir en obligaciones inesperadas.",
        "Dual nationality lets a person be a citizen of two countries at the same time. Not every country allows it; some require renouncing the previous citizenship on naturalization, while others fully accept it. Countries such as the U.S., Canada, the United Kingdom, Australia, Mexico and most EU countries accept dual nationality. Check the specific laws of both your country of origin and your country of naturalization to avoid losing rights or taking on unexpected obligations.",
    ),
    // removal
    rule(
        "deportación",
        "Si enfrenta una posible deportación, busque asesoramiento legal inmediatamente. Puede tener opciones para permanecer legalmente dependiendo de su situación particular, como asilo, cancelación de remoción, ajuste de estatus o salida voluntaria. Un abogado de inmigración puede ayudarle a entender sus derechos y defensas legales. No ignore avisos de comparecencia ante el tribunal de inmigración, ya que podría resultar en una orden de deportación en ausencia.",
        "If you are facing possible deportation, seek legal advice immediately. You may have options to remain legally depending on your situation, such as asylum, cancellation of removal, adjustment of status or voluntary departure. An immigration attorney can help you understand your rights and legal defenses. Do not ignore notices to appear before the immigration court, as that could result in a removal order in absentia.",
    ),
    rule(
        "remoción",
        "La remoción (deportación) puede ser impugnada a través de varias opciones legales. La Cancelación de Remoción requiere residencia continua (7-10 años dependiendo del estatus), buen carácter moral y demostrar dificultad excepcional para familiares ciudadanos/residentes si ocurre la deportación. Otras defensas incluyen asilo, protección bajo la Convención Contra la Tortura, visas U/T para víctimas de crímenes/tráfico, y ajuste de estatus si es elegible. Es crucial obtener representación legal especializada.",
        "Removal (deportation) can be challenged through several legal options. Cancellation of Removal requires continuous residence (7-10 years depending on status), good moral character and showing exceptional hardship to citizen or resident relatives if deportation occurs. Other defenses include asylum, protection under the Convention Against Torture, U/T visas for victims of crimes or trafficking, and adjustment of status if eligible. Obtaining specialized legal representation is crucial.",
    ),
    rule(
        "orden de deportación",
        "Si ha recibido una orden de deportación, tiene opciones como: 1) Apelación a la Junta de Apelaciones de Inmigración (dentro de 30 días), 2) Moción para reabrir o reconsiderar el caso, 3) Solicitud de suspensión de deportación, 4) Protección bajo la Convención Contra la Tortura, o 5) Salida voluntaria para evitar las consecuencias de una deportación formal. Dependiendo de las circunstancias, también podría ser elegible para alivios humanitarios. Consulte inmediatamente a un abogado de inmigración.",
        "If you have received a removal order, your options include: 1) an appeal to the Board of Immigration Appeals (within 30 days), 2) a motion to reopen or reconsider the case, 3) a request for a stay of removal, 4) protection under the Convention Against Torture, or 5) voluntary departure to avoid the consequences of a formal removal. Depending on the circumstances you may also be eligible for humanitarian relief. Consult an immigration attorney immediately.",
    ),
    rule(
        "antecedentes penales",
        "Los antecedentes penales pueden afectar significativamente el estatus migratorio. Delitos considerados como 'agravados' o de 'bajeza moral' pueden resultar en deportación incluso para residentes permanentes. Infracciones como DUI pueden afectar solicitudes de ciudadanía o visas. Es crucial divulgar honestamente cualquier antecedente en solicitudes migratorias y consultar con un abogado especializado antes de declararse culpable de cualquier delito, ya que las consecuencias migratorias pueden ser más severas que las penales.",
        "A criminal record can significantly affect immigration status. Offenses considered 'aggravated felonies' or 'crimes involving moral turpitude' can lead to deportation even for permanent residents. Offenses such as a DUI can affect citizenship or visa applications. It is crucial to honestly disclose any record on immigration applications and to consult a specialized attorney before pleading guilty to any offense, since the immigration consequences can be more severe than the criminal ones.",
    ),
    rule(
        "dui",
        "Un DUI (conducción bajo influencia) puede tener serias consecuencias migratorias. Para solicitudes de naturalización, un DUI reciente (5 años o menos) puede demostrar falta de 'buen carácter moral'. Múltiples DUIs o casos agravados pueden llevar a denegación de visas, inadmisibilidad al país o incluso deportación. Aunque un solo DUI sin agravantes generalmente no causa deportación para residentes permanentes, puede complicar futuros trámites migratorios y viajes internacionales. Se recomienda encarecidamente consultar con un abogado de inmigración especializado.",
        "A DUI (driving under the influence) can have serious immigration consequences. For naturalization applications, a recent DUI (5 years or less) can show a lack of 'good moral character'. Multiple DUIs or aggravated cases can lead to visa denials, inadmissibility or even deportation. Although a single DUI without aggravating factors generally does not cause deportation for permanent residents, it can complicate future immigration filings and international travel. Consulting a specialized immigration attorney is strongly recommended.",
    ),
    // special programs
    rule(
        "daca",
        "DACA (Acción Diferida para los Llegados en la Infancia) ofrece protección temporal contra la deportación y autorización de trabajo para ciertas personas traídas a EE.UU. como niños. Los requisitos incluyen llegada antes de los 16 años, residencia continua desde 2007, educación (graduado/GED/actualmente en escuela), y no tener condenas por delitos graves. DACA se otorga por dos años y puede renovarse. No proporciona un camino directo a la residencia permanente o ciudadanía, pero permite solicitar advance parole para viajar.",
        "DACA (Deferred Action for Childhood Arrivals) offers temporary protection from deportation and work authorization for certain people brought to the U.S. as children. Requirements include arriving before age 16, continuous residence since 2007, education (graduate/GED/currently in school) and no serious criminal convictions. DACA is granted for two years and can be renewed. It does not provide a direct path to permanent residence or citizenship, but it allows applying for advance parole to travel.",
    ),
    rule(
        "vawa",
        "VAWA (Ley de Violencia Contra las Mujeres) permite a víctimas de abuso doméstico por parte de ciudadanos o residentes permanentes de EE.UU. solicitar residencia por cuenta propia, sin depender del abusador. Tanto mujeres como hombres pueden solicitarla si demuestran que sufrieron abuso físico o extrema crueldad, que el matrimonio era de buena fe, y que tienen buen carácter moral. VAWA ofrece confidencialidad, protegiendo a las víctimas de la notificación a sus abusadores sobre su solicitud.",
        "VAWA (Violence Against Women Act) lets victims of domestic abuse by U.S. citizens or permanent residents apply for residence on their own, without depending on the abuser. Both women and men can apply if they show they suffered battery or extreme cruelty, that the marriage was entered in good faith and that they have good moral character. VAWA provides confidentiality, so abusers are not notified about the application.",
    ),
    rule(
        "visa u",
        "La Visa U es para víctimas de ciertos delitos (incluyendo violencia doméstica, agresión sexual, tráfico humano) que han sufrido abuso mental o físico y ayudan a las autoridades en la investigación o procesamiento del delito. Requiere certificación de una agencia de aplicación de la ley y permite residencia temporal por 4 años, autorización de trabajo, y la posibilidad de solicitar residencia permanente después de 3 años. También pueden incluirse ciertos familiares en la solicitud.",
        "The U visa is for victims of certain crimes (including domestic violence, sexual assault and human trafficking) who have suffered mental or physical abuse and help authorities investigate or prosecute the crime. It requires certification from a law enforcement agency and allows temporary residence for 4 years, work authorization and the possibility of applying for permanent residence after 3 years. Certain family members can also be included in the application.",
    ),
    rule(
        "visa t",
        "La Visa T es para víctimas de tráfico humano (sexual o laboral) que están en EE.UU. debido al tráfico, cooperan con las autoridades (salvo menores o excepciones por trauma), y demuestran que sufrirían dificultades extremas si fueran deportadas. Proporciona residencia temporal por 4 años, autorización de trabajo, beneficios públicos y la posibilidad de solicitar residencia permanente después de 3 años. Ciertos familiares cercanos también pueden recibir estatus derivado.",
        "The T visa is for victims of human trafficking (sex or labor) who are in the U.S. because of the trafficking, cooperate with authorities (except minors or trauma exceptions) and show they would suffer extreme hardship if removed. It provides temporary residence for 4 years, work authorization, public benefits and the possibility of applying for permanent residence after 3 years. Certain close family members can also receive derivative status.",
    ),
    // status changes
    rule(
        "renovar",
        "Para renovar su estatus migratorio, generalmente debe presentar una solicitud antes de que expire su estatus actual. Comience el proceso con al menos 3-6 meses de antelación. Verifique que siga cumpliendo los requisitos de elegibilidad, prepare documentación actualizada (pasaporte, evidencia de mantenimiento de estatus), y pague las tarifas correspondientes. En muchos casos, puede permanecer legalmente mientras su solicitud de renovación está pendiente, si la presentó antes del vencimiento.",
        "To renew your immigration status you generally must file before your current status expires. Start the process at least 3-6 months in advance. Check that you still meet the eligibility requirements, prepare updated documents (passport, evidence of maintained status) and pay the applicable fees. In many cases you can remain legally while your renewal is pending, as long as you filed before the expiration date.",
    ),
    rule(
        "cambio de estatus",
        "El cambio de estatus permite modificar la categoría migratoria sin salir del país. No todos los cambios son permitidos (como de turista a residente permanente directamente). Requiere estar en estatus legal al solicitar, tener visa válida para la nueva categoría, y cumplir requisitos específicos. Algunas restricciones pueden aplicar, especialmente si entró con visa de no inmigrante pero tenía intención de quedarse. El proceso incluye formularios específicos, documentación de respaldo y, a veces, entrevistas.",
        "A change of status lets you switch immigration category without leaving the country. Not every change is allowed (for example, directly from tourist to permanent resident). You must be in lawful status when applying, be eligible for the new category and meet its specific requirements. Some restrictions may apply, especially if you entered on a nonimmigrant visa while intending to stay. The process involves specific forms, supporting documents and sometimes interviews.",
    ),
    rule(
        "ajuste de estatus",
        "El ajuste de estatus es el proceso para obtener residencia permanente (Green Card) mientras está dentro de EE.UU., evitando el procesamiento consular en el extranjero. Es necesario ser elegible para una Green Card por familia, empleo u otra categoría, haber sido inspeccionado y admitido legalmente (con algunas excepciones), y mantener estatus legal (con excepciones para familiares inmediatos de ciudadanos). El proceso incluye formularios, examen médico, biométricos, y posiblemente una entrevista.",
        "Adjustment of status is the process of obtaining permanent residence (a Green Card) while inside the U.S., avoiding consular processing abroad. You must be eligible for a Green Card through family, employment or another category, have been inspected and admitted lawfully (with some exceptions) and have maintained lawful status (with exceptions for immediate relatives of citizens). The process includes forms, a medical exam, biometrics and possibly an interview.",
    ),
    rule(
        "caducada",
        "Si su visa o estatus ha caducado, las consecuencias y opciones varían según el país y su situación. En muchos casos, permanecer después del vencimiento puede resultar en prohibiciones de reingreso, dificultades para futuras solicitudes de visa, o deportación. Opciones potenciales incluyen: solicitar prórroga (si aún está dentro del período permitido), cambio de estatus, ajuste a residencia permanente si es elegible, salida voluntaria, o en algunos casos, solicitar alivio por razones humanitarias o dificultades extremas.",
        "If your visa or status has expired, the consequences and options depend on the country and your situation. In many cases, staying past the expiration date can lead to re-entry bars, difficulties with future visa applications, or deportation. Possible options include requesting an extension (if still within the allowed period), a change of status, adjustment to permanent residence if eligible, voluntary departure or, in some cases, requesting humanitarian or extreme-hardship relief.",
    ),
    rule(
        "overstay",
        "Permanecer más allá del período autorizado (overstay) puede tener graves consecuencias migratorias. En EE.UU., overstays de más de 180 días conllevan prohibición de reingreso de 3 años; más de 1 año resulta en prohibición de 10 años. Afecta futuros trámites migratorios y puede llevar a deportación. Algunas opciones incluyen: matrimonio con ciudadano (si es genuino), asilo (si califica), visas U/T para víctimas de crímenes, o perdones por dificultad extrema para familiares ciudadanos/residentes. Consulte urgentemente a un abogado de inmigración.",
        "Staying beyond the authorized period (overstay) can have serious immigration consequences. In the U.S., overstays of more than 180 days trigger a 3-year re-entry bar; more than 1 year results in a 10-year bar. It affects future immigration filings and can lead to deportation. Some options include marriage to a citizen (if genuine), asylum (if you qualify), U/T visas for crime victims, or extreme-hardship waivers based on citizen or resident relatives. Consult an immigration attorney urgently.",
    ),
    // legal counsel
    rule(
        "abogado",
        "Para asuntos migratorios, es altamente recomendable consultar con un abogado especializado en inmigración o representante acreditado. Pueden evaluar su caso específico, explicar opciones migratorias, preparar y presentar solicitudes, representarle ante autoridades migratorias y tribunales, y ayudarle a navegar procesos complejos. Para encontrar representación legal asequible, considere organizaciones sin fines de lucro de servicios legales, clínicas legales universitarias, o programas pro bono en su área.",
        "For immigration matters, consulting a specialized immigration attorney or accredited representative is highly recommended. They can evaluate your specific case, explain your immigration options, prepare and file applications, represent you before immigration authorities and courts, and help you navigate complex processes. To find affordable legal representation, consider nonprofit legal service organizations, university legal clinics or pro bono programs in your area.",
    ),
];
