//! Built-in reference tables for the Spanish LOMLOE key-competency framework
//!
//! The descriptor set is closed and externally defined; it is reproduced here
//! verbatim and never mutated at runtime.

/// Descriptor code to human-readable description
pub const KEY_COMPETENCY_DESCRIPTORS: &[(&str, &str)] = &[
    ("CCL1", "Expresión oral, escrita, signada o multimodal."),
    ("CCL2", "Comprensión e interpretación de textos."),
    ("CCL3", "Búsqueda, selección y tratamiento de información."),
    ("CCL4", "Competencia literaria y lectura."),
    ("CCL5", "Uso ético, inclusivo y democrático del lenguaje."),
    ("CP1", "Uso básico de al menos una lengua adicional."),
    ("CP2", "Transferencias entre lenguas y estrategias plurilingües."),
    ("CP3", "Valoración de la diversidad lingüística y cultural."),
    ("STEM1", "Razonamiento matemático y resolución de problemas."),
    ("STEM2", "Pensamiento científico: observar, preguntar, experimentar."),
    ("STEM3", "Diseño y realización de proyectos y prototipos."),
    ("STEM4", "Comunicación y representación científica y matemática."),
    ("STEM5", "Salud, sostenibilidad y acción responsable sobre el entorno."),
    ("CD1", "Búsqueda y tratamiento de información digital."),
    ("CD2", "Creación e integración de contenidos digitales."),
    ("CD3", "Trabajo cooperativo y comunicación en entornos digitales."),
    ("CD4", "Uso seguro, crítico y saludable de la tecnología."),
    ("CD5", "Soluciones digitales y pensamiento computacional."),
    ("CPSAA1", "Conciencia y gestión personal y emocional."),
    ("CPSAA2", "Salud física y mental."),
    ("CPSAA3", "Empatía, convivencia y resolución pacífica."),
    ("CPSAA4", "Metacognición, planificación y autorregulación."),
    ("CPSAA5", "Motivación, colaboración y aprendizaje continuo."),
    ("CC1", "Participación democrática y normas sociales."),
    ("CC2", "Valores, derechos y deberes."),
    ("CC3", "Compromiso social y mejora del entorno."),
    ("CE1", "Iniciativa, curiosidad e identificación de oportunidades."),
    ("CE2", "Diseño y desarrollo de proyectos."),
    ("CE3", "Evaluación, revisión y mejora de proyectos."),
    (
        "CEC1",
        "Comprensión y valoración de manifestaciones culturales y artísticas.",
    ),
    ("CEC2", "Creación artística y expresión personal."),
    (
        "CEC3",
        "Participación en actividades culturales con actitud crítica y respetuosa.",
    ),
];

/// Descriptor-code prefix to key-competency group label
pub const COMPETENCY_GROUPS: &[(&str, &str)] = &[
    ("CCL", "Competencia en comunicación lingüística"),
    ("CP", "Competencia plurilingüe"),
    (
        "STEM",
        "Competencia matemática y competencia en ciencia, tecnología e ingeniería",
    ),
    ("CD", "Competencia digital"),
    ("CPSAA", "Competencia personal, social y de aprender a aprender"),
    ("CC", "Competencia ciudadana"),
    ("CE", "Competencia emprendedora"),
    ("CEC", "Competencia en conciencia y expresión culturales"),
];
