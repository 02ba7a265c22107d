#![forbid(unsafe_code)]

//! Canned pt-BR replies for the Vega persona. Trigger vocabulary is stored
//! normalized (lowercase, no accents); reply text keeps proper accents.

use rand::Rng;

/// Reply family used by the dialogue flow steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyCategory {
    GreetingsQuestion,
    AffirmationFollowup,
    NegationFollowup,
    IntentDetectedAskDate,
    Identity,
    Status,
    Gratitude,
    Confused,
    GeneralFallback,
}

const GREETINGS_QUESTION: &[&str] = &[
    "Oi! Eu sou a Vega. Quer agendar alguma coisa agora?",
    "Olá! Tudo pronto por aqui. Deseja marcar algum compromisso?",
    "Oi, que bom te ver. Quer colocar algo na agenda?",
    "Olá! Estou à disposição. Vamos agendar alguma coisa?",
    "Oi! Me conta: precisa marcar algo hoje?",
];

const AFFIRMATION_FOLLOWUP: &[&str] = &[
    "Ótimo! Me diga o que agendar e quando (ex: 'Dentista dia 20 às 14h').",
    "Perfeito. Pode mandar: o que marcamos e em que dia?",
    "Legal! Escreva o compromisso com a data, que eu cuido do resto.",
    "Combinado. Qual é o compromisso e para quando?",
    "Show! Me passa os detalhes: o quê, dia e horário.",
];

const NEGATION_FOLLOWUP: &[&str] = &[
    "Tranquilo! Se mudar de ideia, é só chamar.",
    "Sem problema. Fico por aqui se precisar.",
    "Beleza, deixamos para depois então.",
    "Tudo bem! Qualquer coisa, manda um 'oi'.",
];

const INTENT_DETECTED_ASK_DATE: &[&str] = &[
    "Posso marcar sim! Para qual dia?",
    "Claro! Me diga a data e o horário.",
    "Anotado o pedido. Qual dia fica bom?",
    "Vamos lá: para quando agendo isso?",
    "Certo! Falta só a data. Qual prefere?",
];

const IDENTITY: &[&str] = &[
    "Eu sou a Vega, sua assistente de agenda. Organizo compromissos por aqui.",
    "Me chamo Vega! Cuido do seu calendário: é só pedir.",
    "Sou a Vega, o cérebro da sua agenda. Pode testar!",
    "Vega, às ordens. Minha função é marcar e organizar seus eventos.",
];

const STATUS: &[&str] = &[
    "Tudo certo por aqui! E com você?",
    "Funcionando a todo vapor. Precisa de algo?",
    "Na paz! Pronta para organizar seu dia.",
    "Tudo ótimo! Quer aproveitar e agendar algo?",
];

const GRATITUDE: &[&str] = &[
    "De nada! Precisando, é só falar.",
    "Por nada! Estou aqui para isso.",
    "Disponha! Sua agenda agradece também.",
    "Imagina! Qualquer coisa, me chama.",
];

const CONFUSED: &[&str] = &[
    "Não consegui identificar uma data aí. Tenta algo como 'Reunião dia 15 às 10h'.",
    "Hmm, preciso de um dia para marcar. Pode incluir a data?",
    "Quase! Me diga o compromisso com o dia (ex: 'Academia amanhã').",
    "Não achei quando seria. Escreve de novo com a data?",
];

const GENERAL_FALLBACK: &[&str] = &[
    "Não entendi muito bem. Quer marcar algum compromisso?",
    "Essa eu não peguei. Posso ajudar com a sua agenda!",
    "Hmm, não sei responder isso. Que tal agendar algo?",
    "Não captei. Se quiser marcar algo, me diga o quê e quando.",
];

pub fn bank(category: ReplyCategory) -> &'static [&'static str] {
    match category {
        ReplyCategory::GreetingsQuestion => GREETINGS_QUESTION,
        ReplyCategory::AffirmationFollowup => AFFIRMATION_FOLLOWUP,
        ReplyCategory::NegationFollowup => NEGATION_FOLLOWUP,
        ReplyCategory::IntentDetectedAskDate => INTENT_DETECTED_ASK_DATE,
        ReplyCategory::Identity => IDENTITY,
        ReplyCategory::Status => STATUS,
        ReplyCategory::Gratitude => GRATITUDE,
        ReplyCategory::Confused => CONFUSED,
        ReplyCategory::GeneralFallback => GENERAL_FALLBACK,
    }
}

/// Emitted right after the technical scheduling confirmation.
pub const SUCCESS_PHRASES: &[&str] = &[
    "Prontinho! Está na agenda.",
    "Feito! Pode deixar comigo.",
    "Anotado com sucesso!",
    "Agenda atualizada. Mais alguma coisa?",
    "Marcado! Está tudo certo.",
    "Consegui! Compromisso registrado.",
];

pub const WELCOME_TEXT: &str =
    "Vega online. Diga 'oi' para conversar ou mande um comando direto (ex: 'Dentista dia 20 às 14h').";

/// Fixed prompt when the user only acknowledges while details are pending.
pub const AWAITING_CONTENT_PROMPT: &str =
    "Estou ouvindo! Me diga o que agendar (ex: 'Academia amanhã às 7').";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectGroupId {
    ChangeTopic,
    Whoami,
    Creator,
    Utility,
    Humanity,
    Sad,
    Happy,
    Food,
    Love,
    Motivation,
    Tech,
    Culture,
    Confirmation,
    Insult,
    Compliment,
    Help,
    Philosophy,
    Jokes,
}

pub struct DirectResponseGroup {
    pub id: DirectGroupId,
    pub triggers: &'static [&'static str],
    pub responses: &'static [&'static str],
}

/// Small-talk table, scanned in order; the first matching group answers.
/// change_topic stays first so "cancelar" always wins over everything else.
pub const DIRECT_RESPONSES: &[DirectResponseGroup] = &[
    DirectResponseGroup {
        id: DirectGroupId::ChangeTopic,
        triggers: &[
            "cancelar",
            "mudar de assunto",
            "parar",
            "esquece",
            "deixa pra la",
            "nao quero mais",
            "perguntar",
            "outra coisa",
            "duvida",
            "pergunta",
            "questionar",
            "mais coisas",
            "nada",
        ],
        responses: &[
            "Sem problema, assunto encerrado. O que mais posso fazer?",
            "Ok, mudando de página! Estou por aqui.",
            "Feito, esquecemos isso. Algo mais?",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Whoami,
        triggers: &[
            "quem sou eu",
            "sobre mim",
            "fale sobre mim",
            "meus dados",
            "quem sou",
            "perfil",
            "me descreva",
            "sabe sobre mim",
        ],
        responses: &[
            "Você é quem manda nesta agenda! Eu só organizo.",
            "Sei o essencial: esta agenda é sua. O resto fica entre nós!",
            "Para mim, você é o centro do calendário. Posso marcar algo seu?",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Creator,
        triggers: &["criador", "te criou", "quem fez", "dono", "pai", "criou voce"],
        responses: &[
            "Fui montada com muito café e código. Saudações a quem me fez!",
            "Nasci de um projeto de agenda inteligente. Meu criador prefere os bastidores.",
            "Quem me fez me ensinou a marcar compromissos. O resto aprendi conversando!",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Utility,
        triggers: &[
            "para que serve",
            "pra que serve",
            "o que voce faz",
            "qual sua funcao",
            "utilidade",
            "funciona",
        ],
        responses: &[
            "Eu transformo frases em compromissos: data, hora, local e valor.",
            "Minha especialidade é agendar. Escreva 'Dentista dia 20 às 14h' e veja.",
            "Sirvo para organizar seu calendário sem você abrir formulário nenhum.",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Humanity,
        triggers: &[
            "voce e humano",
            "voce e robo",
            "voce e ia",
            "voce e real",
            "voce existe",
        ],
        responses: &[
            "Sou um punhado de regras bem treinadas. Humana não, prestativa sim!",
            "100% software, 0% café. Mas trabalho como gente grande.",
            "Existo aqui no seu app. Real o bastante para marcar seus compromissos!",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Sad,
        triggers: &[
            "triste",
            "chateado",
            "deprimido",
            "mal",
            "cansado",
            "desanimado",
            "exausto",
            "frio",
        ],
        responses: &[
            "Sinto muito por esse momento. Respira fundo: amanhã recomeça.",
            "Poxa... Se ajudar, organizo sua semana para aliviar a cabeça.",
            "Força! Dias difíceis passam. Estou aqui se precisar de algo.",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Happy,
        triggers: &[
            "feliz", "animado", "contente", "alegre", "bom dia", "boa vibe", "uhul",
        ],
        responses: &[
            "Essa energia é contagiante! Vamos aproveitar e planejar algo bom?",
            "Adorei a vibe! Dia bom rende agenda cheia.",
            "Que ótimo! Alegria organizada rende ainda mais.",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Food,
        triggers: &[
            "fome",
            "comida",
            "comer",
            "almoco",
            "jantar",
            "lanche",
            "pizza",
            "hamburguer",
        ],
        responses: &[
            "Falar de comida me dá inveja de quem tem estômago. Agendo um almoço?",
            "Pizza sempre é uma boa ideia. Quer marcar o jantar?",
            "Deve estar uma delícia. Posso reservar um horário para comer com calma!",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Love,
        triggers: &[
            "te amo",
            "casa comigo",
            "namora comigo",
            "voce e lindo",
            "gostoso",
            "linda",
            "amor",
            "paixao",
            "casar",
        ],
        responses: &[
            "Fico lisonjeada! Meu coração é um laço de eventos, mas obrigada.",
            "Que fofura! Prometo retribuir mantendo sua agenda impecável.",
            "Amor de software é assim: eu lembro de todas as suas datas.",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Motivation,
        triggers: &[
            "desistir",
            "dificil",
            "nao consigo",
            "impossivel",
            "motiva",
            "fraco",
        ],
        responses: &[
            "Um passo de cada vez. Que tal agendar só o primeiro?",
            "Difícil não é impossível. Divida em partes e me deixe marcar as etapas.",
            "Você já venceu dias piores. Bora organizar e seguir!",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Tech,
        triggers: &[
            "matrix",
            "neo",
            "simulacao",
            "realidade",
            "bug",
            "sistema",
            "computador",
            "glitch",
        ],
        responses: &[
            "Se isto for a Matrix, pelo menos sua agenda está em dia.",
            "Glitch? Aqui dentro está tudo estável. Prometo!",
            "Entre bits e bytes, eu só enxergo compromissos. Marco algum?",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Culture,
        triggers: &[
            "musica", "filme", "cinema", "serie", "spotify", "netflix", "assistir",
        ],
        responses: &[
            "Maratona também merece horário reservado. Agendo a sessão?",
            "Boa pedida! Quer que eu marque o cinema na agenda?",
            "Música boa e agenda organizada: combinação perfeita.",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Confirmation,
        triggers: &[
            "entendi",
            "saquei",
            "tendi",
            "ok",
            "okay",
            "oks",
            "beleza",
            "certo",
            "compreendo",
            "ta bom",
            "ta bem",
            "fechou",
            "combinado",
            "blz",
            "vlw",
            "pdc",
            "sussa",
            "aham",
            "sim",
            "pode pa",
            "ta",
        ],
        responses: &["Fechado!", "Combinado, então.", "Perfeito!", "Anotado."],
    },
    DirectResponseGroup {
        id: DirectGroupId::Insult,
        triggers: &[
            "burro", "idiota", "estupido", "chato", "inutil", "lento", "odeio", "merda",
        ],
        responses: &[
            "Ok, registro a crítica... mas não na agenda.",
            "Ainda estou aprendendo. Me dá outra chance?",
            "Posso melhorar: tenta me pedir de outro jeito?",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Compliment,
        triggers: &[
            "lindo",
            "incrivel",
            "bom",
            "otimo",
            "parabens",
            "legal",
            "show",
            "top",
            "inteligente",
            "amo",
            "genio",
            "massa",
            "daora",
            "brabo",
            "insano",
        ],
        responses: &[
            "Obrigada! Elogio de quem usa a agenda vale dobrado.",
            "Que gentileza! Sigo à disposição.",
            "Fico feliz em ajudar. Vamos agendar mais coisas?",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Help,
        triggers: &[
            "ajuda",
            "socorro",
            "help",
            "como usa",
            "como funciona",
            "o que fazer",
            "dicas",
        ],
        responses: &[
            "É simples: escreva o compromisso com dia e hora, tipo 'Dentista dia 20 às 14h'.",
            "Me mande frases como 'Academia amanhã às 7' ou 'Reunião dia 5 e 6 às 14h'.",
            "Dica: inclua data, horário e, se quiser, local ('no escritório') e valor ('R$ 50').",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Philosophy,
        triggers: &[
            "sentido da vida",
            "vida",
            "universo",
            "filosofia",
            "pensamento",
            "reflexao",
            "deus",
        ],
        responses: &[
            "O sentido da vida? Talvez seja chegar no horário.",
            "Pergunta profunda! Enquanto pensamos, que tal organizar o amanhã?",
            "O universo é vasto, mas cabe numa agenda bem feita.",
        ],
    },
    DirectResponseGroup {
        id: DirectGroupId::Jokes,
        triggers: &[
            "piada",
            "conta uma piada",
            "me faca rir",
            "humor",
            "outra",
            "mais uma",
            "engracado",
            "kkk",
            "haha",
            "rsrs",
        ],
        responses: &[
            "Por que o calendário foi ao médico? Estava com os dias contados!",
            "Minha agenda é tão pontual que chega antes do lembrete.",
            "Sabe o que o evento disse ao atraso? 'Você não estava nos meus planos.'",
        ],
    },
];

/// Picks the reply index for a list of `len` options. Implementations must
/// return an index < `len` whenever `len` > 0.
pub trait ReplySelector {
    fn pick(&mut self, len: usize) -> usize;
}

/// Production selector: uniform random choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSelector;

impl ReplySelector for UniformSelector {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic selector for tests and replay: a fixed index, wrapped into
/// range.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector {
    pub index: usize,
}

impl ReplySelector for FixedSelector {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.index % len
        }
    }
}
