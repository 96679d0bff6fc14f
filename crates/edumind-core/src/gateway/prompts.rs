//! Prompt texts and fixed fallback strings, per language.

use indoc::formatdoc;

use crate::locale::Locale;

pub fn plan(locale: Locale, topics: &str, available_hours: f64) -> String {
    match locale {
        Locale::PtBr => formatdoc! {r#"
            Crie um cronograma de estudos detalhado para os seguintes temas: "{topics}".
            Eu tenho {available_hours} horas disponíveis. Retorne um array JSON de itens de cronograma.
            Cada item deve ter "time" (HH:MM), "subject" (string) e "duration" (número de minutos)."#,
            topics = topics,
            available_hours = available_hours,
        },
        Locale::En => formatdoc! {r#"
            Create a detailed study timetable for the following topics: "{topics}".
            I have {available_hours} hours available. Return a JSON array of timetable items.
            Each item must have "time" (HH:MM), "subject" (string) and "duration" (number of minutes)."#,
            topics = topics,
            available_hours = available_hours,
        },
    }
}

pub fn quote(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Dê uma frase motivacional poderosa e curta em português brasileiro para um estudante cansado. Máximo 20 palavras.",
        Locale::En => "Give a short, powerful motivational sentence in English for a tired student. At most 20 words.",
    }
}

pub fn search(locale: Locale, topic: &str) -> String {
    match locale {
        Locale::PtBr => formatdoc! {r#"
            Forneça um resumo educativo e atualizado sobre o tema: "{topic}".
            Explique os conceitos principais de forma didática para um estudante."#,
            topic = topic,
        },
        Locale::En => formatdoc! {r#"
            Give an up-to-date educational summary of the topic: "{topic}".
            Explain the main concepts in a way a student can follow."#,
            topic = topic,
        },
    }
}

pub fn places(locale: Locale, query: &str) -> String {
    match locale {
        Locale::PtBr => format!(
            "Encontre os melhores lugares para estudar (bibliotecas, cafés, coworkings) relacionados a: \"{query}\"."
        ),
        Locale::En => format!(
            "Find the best places to study (libraries, cafés, coworking spaces) related to: \"{query}\"."
        ),
    }
}

pub fn fallback_quote(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "O sucesso é a soma de pequenos esforços repetidos dia após dia.",
        Locale::En => "Success is the sum of small efforts, repeated day in and day out.",
    }
}

/// Shown when a topic lookup fails outright.
pub fn topic_unavailable(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Não foi possível carregar informações sobre este tema no momento.",
        Locale::En => "Could not load information about this topic right now.",
    }
}

/// Shown when a topic lookup succeeds with no text.
pub fn empty_summary(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Não foi possível gerar um resumo para este tema.",
        Locale::En => "Could not generate a summary for this topic.",
    }
}

pub fn no_places(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Não foram encontrados locais específicos.",
        Locale::En => "No specific places were found.",
    }
}

pub fn default_places_query(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "bibliotecas e cafés silenciosos para estudar",
        Locale::En => "quiet libraries and cafés for studying",
    }
}

pub fn source_title(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Fonte externa",
        Locale::En => "External source",
    }
}

pub fn place_title(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Local de Estudo",
        Locale::En => "Study spot",
    }
}
