#![forbid(unsafe_code)]

//! Fixed pt-BR vocabulary. Every entry is already in normalized form
//! (lowercase, no accents); matching happens on normalized utterances.

pub const MONTHS: &[(&str, u32)] = &[
    ("janeiro", 1),
    ("jan", 1),
    ("fevereiro", 2),
    ("fev", 2),
    ("marco", 3),
    ("mar", 3),
    ("abril", 4),
    ("abr", 4),
    ("maio", 5),
    ("mai", 5),
    ("junho", 6),
    ("jun", 6),
    ("julho", 7),
    ("jul", 7),
    ("agosto", 8),
    ("ago", 8),
    ("setembro", 9),
    ("set", 9),
    ("outubro", 10),
    ("out", 10),
    ("novembro", 11),
    ("nov", 11),
    ("dezembro", 12),
    ("dez", 12),
];

pub fn month_number(name: &str) -> Option<u32> {
    MONTHS.iter().find(|(k, _)| *k == name).map(|(_, n)| *n)
}

/// Weekday index (days from Sunday) with the accepted spellings. The first
/// spelling is the canonical consumed span.
pub const WEEKDAYS: &[(u32, &[&str])] = &[
    (0, &["domingo", "doming", "dom"]),
    (1, &["segunda", "segund", "seg"]),
    (2, &["terca", "ter", "terc"]),
    (3, &["quarta", "quart", "qua"]),
    (4, &["quinta", "quint", "qui"]),
    (5, &["sexta", "sext", "sex"]),
    (6, &["sabado", "sabad", "sab"]),
];

pub const TODAY_WORDS: &[&str] = &["hoje", "hj"];
pub const TOMORROW_WORDS: &[&str] = &["amanha", "amnh"];

pub const SCHEDULING_INTENT_WORDS: &[&str] = &[
    "marcar",
    "marcando",
    "agendar",
    "agendando",
    "anotar",
    "anotando",
    "colocar",
    "botar",
    "horario",
    "compromisso",
    "reuniao",
    "nova",
    "novo",
    "adicionar",
];

pub const YES_WORDS: &[&str] = &[
    "sim",
    "claro",
    "quero",
    "com certeza",
    "pode ser",
    "bora",
    "agora",
    "preciso",
    "exatamente",
    "yes",
    "aham",
    "s",
    "ss",
    "prossiga",
    "marcando",
    "agendando",
];

pub const NO_WORDS: &[&str] = &[
    "nao",
    "nop",
    "nem",
    "agora nao",
    "depois",
    "negativo",
    "nunca",
    "cancelar",
    "n",
    "nn",
    "nao quero",
    "nada",
];

pub const GREETING_WORDS: &[&str] = &[
    "oi",
    "oie",
    "oii",
    "oiii",
    "oiee",
    "oieee",
    "ola",
    "hello",
    "hi",
    "hey",
    "eai",
    "eae",
    "opa",
    "salve",
    "bom dia",
    "boa tarde",
    "boa noite",
    "roi",
    "coe",
    "fala",
    "ei",
];

pub const IDENTITY_WORDS: &[&str] = &[
    "quem e voce",
    "quem e",
    "seu nome",
    "o que voce faz",
    "quem fala",
];

pub const STATUS_WORDS: &[&str] = &[
    "tudo bem",
    "como voce esta",
    "beleza",
    "tranquilo",
    "suave",
    "de boa",
];

pub const GRATITUDE_WORDS: &[&str] = &["obrigado", "valeu", "thanks", "grato", "agradeco"];

/// Words dropped from synthesized titles: command verbs, connectives,
/// scheduling nouns, fillers, money words.
pub const TITLE_STOPWORDS: &[&str] = &[
    "agendar",
    "agenda",
    "marcar",
    "criar",
    "nova",
    "novo",
    "adicionar",
    "bot",
    "para",
    "por",
    "de",
    "do",
    "da",
    "dos",
    "das",
    "em",
    "no",
    "na",
    "nos",
    "nas",
    "a",
    "o",
    "as",
    "os",
    "um",
    "uma",
    "uns",
    "umas",
    "este",
    "esta",
    "esse",
    "essa",
    "isso",
    "isto",
    "aquilo",
    "que",
    "qual",
    "onde",
    "quando",
    "quanto",
    "e",
    "ou",
    "mas",
    "se",
    "porque",
    "como",
    "com",
    "dia",
    "dias",
    "mes",
    "ano",
    "hoje",
    "amanha",
    "ontem",
    "horario",
    "hora",
    "horas",
    "favor",
    "pode",
    "quero",
    "gostaria",
    "preciso",
    "desejo",
    "vou",
    "vai",
    "compromisso",
    "evento",
    "reuniao",
    "tarefa",
    "lembrete",
    "anotacao",
    "ok",
    "okay",
    "blz",
    "beleza",
    "ta",
    "entendi",
    "certo",
    "obrigado",
    "reais",
    "reias",
    "valor",
    "custo",
    "preco",
    "pagamento",
    "eh",
    "inicio",
    "fim",
    "termino",
    "durante",
    "pelo",
    "pela",
    "servico",
    "fazer",
    "realizar",
    "ter",
    "pra",
    "sera",
    "realizado",
    "realizada",
    "acontecer",
    "acontecera",
    "agendado",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn at_vocab_01_month_lookup_handles_both_forms() {
        assert_eq!(month_number("marco"), Some(3));
        assert_eq!(month_number("mar"), Some(3));
        assert_eq!(month_number("dezembro"), Some(12));
        assert_eq!(month_number("xyz"), None);
    }

    #[test]
    fn at_vocab_02_every_table_entry_is_already_normalized() {
        let tables: &[&[&str]] = &[
            TODAY_WORDS,
            TOMORROW_WORDS,
            SCHEDULING_INTENT_WORDS,
            YES_WORDS,
            NO_WORDS,
            GREETING_WORDS,
            IDENTITY_WORDS,
            STATUS_WORDS,
            GRATITUDE_WORDS,
            TITLE_STOPWORDS,
        ];
        for table in tables {
            for word in *table {
                assert_eq!(normalize(word), *word, "entry {word:?} is not normalized");
            }
        }
        for (name, _) in MONTHS {
            assert_eq!(normalize(name), *name);
        }
        for (_, words) in WEEKDAYS {
            for word in *words {
                assert_eq!(normalize(word), *word);
            }
        }
    }

    #[test]
    fn at_vocab_03_weekday_order_is_days_from_sunday() {
        assert_eq!(WEEKDAYS[0].0, 0);
        assert_eq!(WEEKDAYS[0].1[0], "domingo");
        assert_eq!(WEEKDAYS[6].0, 6);
        assert_eq!(WEEKDAYS[6].1[0], "sabado");
    }
}
