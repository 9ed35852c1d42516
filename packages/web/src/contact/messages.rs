//! User-facing strings for the contact section, keyed per locale

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    pub fn variants() -> &'static [Locale] {
        &[Locale::En, Locale::Ru]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Notifications
    Sent,
    Rejected,
    NetworkError,
    Dismiss,

    // Submit control
    SubmitLabel,
    SendingLabel,

    // Section copy
    Eyebrow,
    Heading,
    Intro,

    // Fields
    NameLabel,
    NamePlaceholder,
    EmailLabel,
    EmailPlaceholder,
    MessageLabel,
    MessagePlaceholder,
}

impl MessageKey {
    pub fn all() -> &'static [MessageKey] {
        use MessageKey::*;
        &[
            Sent,
            Rejected,
            NetworkError,
            Dismiss,
            SubmitLabel,
            SendingLabel,
            Eyebrow,
            Heading,
            Intro,
            NameLabel,
            NamePlaceholder,
            EmailLabel,
            EmailPlaceholder,
            MessageLabel,
            MessagePlaceholder,
        ]
    }
}

/// Lookup table from [`MessageKey`] to the string for one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MessageCatalog {
    locale: Locale,
}

impl MessageCatalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: MessageKey) -> &'static str {
        match self.locale {
            Locale::En => en(key),
            Locale::Ru => ru(key),
        }
    }
}

fn en(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Sent => "Message sent. Thank you!",
        MessageKey::Rejected => {
            "Could not send your message. Please try again or email me directly."
        }
        MessageKey::NetworkError => "Network error. Check your connection and try again.",
        MessageKey::Dismiss => "Dismiss",
        MessageKey::SubmitLabel => "Submit",
        MessageKey::SendingLabel => "Sending...",
        MessageKey::Eyebrow => "Contact",
        MessageKey::Heading => "Let's work together",
        MessageKey::Intro => {
            "I'm always interested in new opportunities and exciting projects. \
             Whether you have a question or just want to say hi, I'll try my \
             best to get back to you!"
        }
        MessageKey::NameLabel => "Name",
        MessageKey::NamePlaceholder => "Your name",
        MessageKey::EmailLabel => "Email",
        MessageKey::EmailPlaceholder => "your@email.com",
        MessageKey::MessageLabel => "Message",
        MessageKey::MessagePlaceholder => "Tell me about your project...",
    }
}

fn ru(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Sent => "Сообщение отправлено. Спасибо!",
        MessageKey::Rejected => {
            "Не удалось отправить сообщение. Попробуйте ещё раз или напишите на почту напрямую."
        }
        MessageKey::NetworkError => "Сетевая ошибка. Проверьте соединение и попробуйте снова.",
        MessageKey::Dismiss => "Закрыть",
        MessageKey::SubmitLabel => "Отправить",
        MessageKey::SendingLabel => "Отправка...",
        MessageKey::Eyebrow => "Контакты",
        MessageKey::Heading => "Давайте работать вместе",
        MessageKey::Intro => {
            "Мне всегда интересны новые возможности и увлекательные проекты. \
             Если у вас есть вопрос или вы просто хотите поздороваться, \
             я постараюсь ответить как можно скорее!"
        }
        MessageKey::NameLabel => "Имя",
        MessageKey::NamePlaceholder => "Ваше имя",
        MessageKey::EmailLabel => "Email",
        MessageKey::EmailPlaceholder => "your@email.com",
        MessageKey::MessageLabel => "Сообщение",
        MessageKey::MessagePlaceholder => "Расскажите о вашем проекте...",
    }
}

/// Outcome class of a concluded submission, as shown to the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Rejected,
    NetworkError,
}

impl NoticeKind {
    pub fn message_key(&self) -> MessageKey {
        match self {
            NoticeKind::Success => MessageKey::Sent,
            NoticeKind::Rejected => MessageKey::Rejected,
            NoticeKind::NetworkError => MessageKey::NetworkError,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, NoticeKind::Success)
    }
}

/// A notification ready to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: &'static str,
}

impl Notice {
    pub fn new(kind: NoticeKind, catalog: &MessageCatalog) -> Self {
        Self {
            kind,
            text: catalog.get(kind.message_key()),
        }
    }
}
