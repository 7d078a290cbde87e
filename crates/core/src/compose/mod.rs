//! Response composition
//!
//! Turns a classified message (plus free slots, when scheduling) into either
//! a canned reply or a generation prompt. This is the presentation boundary:
//! slot timestamps are formatted for humans here and nowhere else.

use chrono::{Datelike, Timelike};
use chrono_tz::Tz;
use recruitbot_domain::{GenerationPrompt, Intent, ReplyPlan, ReplyRequest, Slot};

const GREETING_REPLY: &str = "Здравствуйте!";
const SMALL_TALK_REPLY: &str = "Спасибо, все отлично! Как ваши дела?";
const FAREWELL_REPLY: &str = "Всего доброго!";
const NO_SLOTS_REPLY: &str =
    "К сожалению, в календаре нет свободных слотов на ближайшую неделю.";

/// Russian month names, genitive case, for slot presentation
const MONTHS_RU: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Builds replies and generation prompts from classified requests
pub struct ResponseComposer {
    tz: Tz,
}

impl ResponseComposer {
    /// Create a composer presenting slots in the given time zone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Compose a reply plan for the request.
    ///
    /// Greeting, small talk and farewell get canned replies; a scheduling
    /// request with no free slots short-circuits to a canned "no
    /// availability" message. Only the remaining cases reach the generation
    /// backend.
    pub fn compose(&self, request: &ReplyRequest) -> ReplyPlan {
        match request.intent {
            Intent::Greeting => ReplyPlan::Canned(GREETING_REPLY.to_string()),
            Intent::SmallTalk => ReplyPlan::Canned(SMALL_TALK_REPLY.to_string()),
            Intent::Farewell => ReplyPlan::Canned(FAREWELL_REPLY.to_string()),
            Intent::SchedulingRequest => self.compose_scheduling(request),
            Intent::General => ReplyPlan::Generate(self.general_prompt(&request.message)),
        }
    }

    /// Format a slot start for presentation, e.g. "2 сентября 2026 в 10:00".
    pub fn format_slot(&self, slot: &Slot) -> String {
        let local = slot.start().with_timezone(&self.tz);
        let month = MONTHS_RU[local.month0() as usize];
        format!(
            "{} {} {} в {:02}:{:02}",
            local.day(),
            month,
            local.year(),
            local.hour(),
            local.minute()
        )
    }

    fn compose_scheduling(&self, request: &ReplyRequest) -> ReplyPlan {
        if request.slots.is_empty() {
            return ReplyPlan::Canned(NO_SLOTS_REPLY.to_string());
        }

        let slot_list = request
            .slots
            .iter()
            .map(|slot| self.format_slot(slot))
            .collect::<Vec<_>>()
            .join(", ");

        let confirmation = match &request.proposed {
            Some(slot) => format!(
                "\nHR предложил конкретное время: {}. Этот слот свободен — подтверди его в первую очередь.\n",
                self.format_slot(slot)
            ),
            None => String::new(),
        };

        let prompt = format!(
            "Ты — мой вежливый и профессиональный AI-ассистент. Твоя задача — отвечать на сообщения от HR.\n\
             HR хочет назначить встречу.\n\
             \n\
             Сообщение от HR:\n\
             ---\n\
             {message}\n\
             ---\n\
             \n\
             Мои доступные слоты: {slot_list}\n\
             {confirmation}\n\
             Твоя задача:\n\
             1. Ответь на сообщение HR вежливо и по существу.\n\
             2. Естественно впиши в свой ответ предложение о встрече, используя доступные слоты.\n\
             3. Не вываливай все слоты списком. Предложи 2-3 варианта в формате живого диалога.\n\
             4. Будь дружелюбным и профессиональным. Сгенерируй только текст ответа.",
            message = request.message,
        );

        ReplyPlan::Generate(GenerationPrompt::new(prompt))
    }

    fn general_prompt(&self, message: &str) -> GenerationPrompt {
        GenerationPrompt::new(format!(
            "Ты — мой вежливый и профессиональный AI-ассистент. Твоя задача — отвечать на сообщения от HR.\n\
             Это НЕ запрос на назначение встречи.\n\
             \n\
             Сообщение от HR:\n\
             ---\n\
             {message}\n\
             ---\n\
             \n\
             Твоя задача:\n\
             1. Внимательно прочти сообщение и ответь на него по существу.\n\
             2. Прояви интерес и будь позитивным.\n\
             3. НЕ ПРЕДЛАГАЙ время для встречи или созвона, если об этом прямо не просят.\n\
             4. Задай уточняющий вопрос, если это уместно.\n\
             5. Сгенерируй только текст ответа."
        ))
    }
}
