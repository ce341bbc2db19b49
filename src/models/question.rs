use std::sync::OnceLock;

/// Multiple-choice question from the fixed bank. `correct_answer` is always one of
/// `options` and must never leave the server; clients only see [`Question::public_view`]
/// data through the quiz DTOs.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

static BANK: OnceLock<Vec<Question>> = OnceLock::new();

/// The quiz question bank: five fixed questions, not externally configurable.
/// Kept behind an accessor so a persisted bank can replace this without touching
/// the scoring logic.
pub fn question_bank() -> &'static [Question] {
    BANK.get_or_init(|| {
        vec![
            Question {
                id: 1,
                text: "¿Cuál es un componente clave para la estabilidad de un montacargas?".into(),
                options: vec![
                    "El color de la pintura".into(),
                    "El triángulo de estabilidad".into(),
                    "La marca de las llantas".into(),
                    "La velocidad máxima".into(),
                ],
                correct_answer: "El triángulo de estabilidad".into(),
            },
            Question {
                id: 2,
                text: "La inspección pre-operacional de un montacargas se realiza:".into(),
                options: vec![
                    "Semanalmente".into(),
                    "Mensualmente".into(),
                    "Antes de cada turno".into(),
                    "Anualmente".into(),
                ],
                correct_answer: "Antes de cada turno".into(),
            },
            Question {
                id: 3,
                text: "¿Qué significa NTC en el contexto de normativas colombianas?".into(),
                options: vec![
                    "Norma Técnica Colombiana".into(),
                    "Nuevo Tratado Comercial".into(),
                    "Nivel Tecnológico Certificado".into(),
                    "Ninguna de las anteriores".into(),
                ],
                correct_answer: "Norma Técnica Colombiana".into(),
            },
            Question {
                id: 4,
                text: "Un montacargas clase I es generalmente propulsado por:".into(),
                options: vec![
                    "Gasolina".into(),
                    "Diesel".into(),
                    "Eléctricidad (Batería)".into(),
                    "Gas LP".into(),
                ],
                correct_answer: "Eléctricidad (Batería)".into(),
            },
            Question {
                id: 5,
                text: "Levantar una carga excediendo la capacidad nominal del montacargas puede causar:".into(),
                options: vec![
                    "Mayor eficiencia".into(),
                    "Volcamiento".into(),
                    "Ahorro de combustible".into(),
                    "Desgaste uniforme de llantas".into(),
                ],
                correct_answer: "Volcamiento".into(),
            },
        ]
    })
}

pub fn find_question(id: u32) -> Option<&'static Question> {
    question_bank().iter().find(|q| q.id == id)
}
