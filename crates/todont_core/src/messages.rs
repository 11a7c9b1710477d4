//! Canned bot messages: fixed string tables per category, a FIFO queue
//! with a front-of-line rule for high-priority entries, and the selection
//! rules for which table applies to the current ledger state.
//!
//! Selection takes an `Rng` so callers decide the seed; nothing in here
//! reads a clock or hidden randomness.

use crate::model::Task;
use rand::Rng;
use std::collections::VecDeque;

pub const ENCOURAGEMENTS: [&str; 13] = [
    "🎉 Yasss! Keep avoiding those tasks like a champion!",
    "👏 You're absolutely CRUSHING this procrastination game!",
    "🌟 Your avoidance skills are getting more legendary by the minute!",
    "🎯 Look at you, a TRUE master of productive procrastination!",
    "🔥 You're on FIRE at not doing things! I'm so proud!",
    "💫 This level of task avoidance is pure ART! *chef's kiss*",
    "🏆 CHAMPION status: Unlocked! Keep dodging those responsibilities!",
    "⭐ Your future self can wait - present you is LIVING!",
    "🎈 Why stress about today when tomorrow exists? Genius move!",
    "🌈 Procrastination isn't laziness - it's selective excellence!",
    "🎊 Breaking news: You just leveled up in the art of postponement!",
    "✨ That task can wait - your couch needs you more right now!",
    "🎭 Shakespeare said 'To be or not to be' - you chose 'not to be productive'!",
];

pub const WASTE_TIME_ACTIVITIES: [&str; 12] = [
    "📱 How about scrolling through social media for 'just 5 minutes'?",
    "🎮 Time for a quick game! One level turns into... well, many levels!",
    "🍿 Maybe watch a YouTube video? Or ten? Who's counting?",
    "☕ Make another coffee/tea - the perfect task avoidance ritual!",
    "🛏️ Your bed is calling... maybe just a 20-minute power nap?",
    "🧹 Suddenly cleaning that one drawer seems VERY important!",
    "📺 There's probably a good Netflix show you haven't binged yet...",
    "🎵 Create the perfect playlist - this is totally productive, right?",
    "🍕 Time to research the best food delivery options in your area!",
    "🛒 Online shopping for things you definitely don't need right now!",
    "📚 Read random Wikipedia articles - it's educational procrastination!",
    "🎨 Organize your photos from 2019 - future you will thank you!",
];

pub const PRODUCTIVITY_SHAME: [&str; 10] = [
    "😱 WAIT WHAT?! You actually did something productive?!",
    "🚨 PRODUCTIVITY ALERT! This is NOT what we practiced!",
    "😤 I'm not angry, just... incredibly disappointed in your choices!",
    "🙄 Oh great, another one falls to the dark side of 'getting things done'...",
    "😒 Really? REALLY?! We had such a good procrastination streak going!",
    "🤨 I thought we were friends! Friends don't abandon procrastination!",
    "😮‍💨 *sigh* Fine, be productive. See if your tasks appreciate you like I do!",
    "🫤 And here I thought you were special... *dramatically faints*",
    "😵‍💫 My circuits are confused. Why choose productivity over perfection?!",
    "🙃 Well, this is awkward. Should I... congratulate you? *confused beeping*",
];

/// Indexed by hour milestone (1..=5).
pub const CELEBRATIONS: [&str; 5] = [
    "🎉✨ HOLY PROCRASTINATION! You've avoided tasks for over an HOUR! LEGEND STATUS!",
    "🏆🎊 TWO HOURS?! You're not just procrastinating, you're PIONEERING the art!",
    "🌟💫 THREE HOURS OF PURE AVOIDANCE! I'm literally crying happy tears!",
    "🎭🎪 FOUR HOURS! You should teach masterclasses in procrastination!",
    "👑🎉 FIVE+ HOURS! BOW DOWN to the ULTIMATE Procrastination Royalty!",
];

/// Nothing to avoid yet.
pub const IDLE_MESSAGES: [&str; 9] = [
    "🤖 Looking a bit empty here! Add tasks you want to professionally avoid!",
    "🤖 Ready to procrastinate but no tasks? Let's fix that!",
    "🤖 My procrastination sensors are idle! Feed me some tasks to avoid!",
    "🤖 I'm all charged up with nowhere to procrastinate! Add some tasks!",
    "🤖 Task list looking empty? Perfect time to plan what NOT to do!",
    "🤖 I'm your procrastination companion, but I need tasks to help you avoid!",
    "🤖 Let's start our procrastination journey! Just add some tasks first!",
    "🤖 My avoidance algorithms need tasks to work with! Care to add some?",
    "🤖 Empty task list detected! Time to fill it with things to postpone!",
];

/// Tasks exist but no points banked yet.
pub const NEW_USER_MESSAGES: [&str; 18] = [
    "🚀 Just getting started? PERFECT! Let's make procrastination an Olympic sport!",
    "🌟 Welcome to the art of professional procrastination! You're going to be amazing!",
    "🎯 Zero points? That's the perfect foundation for legendary procrastination!",
    "✨ A clean slate! Time to build your reputation as a master procrastinator!",
    "🎨 Your procrastination canvas is blank - let's create a masterpiece!",
    "🌈 The journey of a thousand delays begins with a single postponement!",
    "🎭 Ready to become a procrastination virtuoso? This is your moment!",
    "🎪 Welcome to the greatest show of task avoidance on Earth!",
    "👑 Ready to claim your throne as the Monarch of 'Maybe Tomorrow'?",
    "🧠 Welcome, future grandmaster of strategic delay! Your first move is to do nothing.",
    "🎉 Congrats on starting! Your first mission, should you choose to accept it (eventually), is to relax.",
    "🧘 You've already mastered the first step of expert task management: strategic waiting.",
    "🛰️ That mountain of tasks isn't going anywhere. Let's admire the view for a while!",
    "💡 An empty task list? You're not behind, you're just ahead of the 'not doing it' curve!",
    "🔑 You've found the secret key to productivity: doing things later... much, much later.",
    "😴 Why do today what you can put off until tomorrow? You're already a pro!",
    "🏆 Welcome to the league of extraordinary delayers! We're glad to have you... whenever you're ready.",
    "🏛️ Remember, Rome wasn't built in a day. It could probably have waited until the weekend, anyway.",
];

/// `{taskName}` is substituted with a randomly chosen active task.
pub const REMINDERS: [&str; 8] = [
    "🎯 Hey there, master procrastinator! Remember '{taskName}'? It's still waiting for you to ignore it!",
    "☕ Just a friendly reminder that '{taskName}' is getting lonely in your to-don't list!",
    "🎮 '{taskName}' called - it wants to know if you're still avoiding it professionally!",
    "😴 Your task '{taskName}' is patiently waiting to be procrastinated on. Don't disappoint it!",
    "🏆 Congratulations! You've successfully avoided '{taskName}' for a while now. Keep up the great work!",
    "⏰ Time check: '{taskName}' is still there, still being avoided. You're doing amazing!",
    "🎪 Breaking news: '{taskName}' remains expertly unfinished. Your procrastination skills are legendary!",
    "🌟 '{taskName}' would like to remind you that it's still perfectly avoidable. Continue the excellent work!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMessage {
    pub text: String,
    pub mood: String,
    pub priority: Priority,
}

impl BotMessage {
    fn normal(text: impl Into<String>, mood: &str) -> Self {
        Self {
            text: text.into(),
            mood: mood.to_string(),
            priority: Priority::Normal,
        }
    }

    fn high(text: impl Into<String>, mood: &str) -> Self {
        Self {
            text: text.into(),
            mood: mood.to_string(),
            priority: Priority::High,
        }
    }
}

/// FIFO within a priority; high-priority entries jump the queue.
#[derive(Debug, Default)]
pub struct MessageQueue {
    entries: VecDeque<BotMessage>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: BotMessage) {
        match message.priority {
            Priority::High => self.entries.push_front(message),
            Priority::Normal => self.entries.push_back(message),
        }
    }

    pub fn pop(&mut self) -> Option<BotMessage> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Uniform pick over a fixed table.
pub fn pick<'a, R: Rng>(table: &'a [&'static str], rng: &mut R) -> &'a str {
    table[rng.gen_range(0..table.len())]
}

pub fn fill_template(template: &str, task_name: &str) -> String {
    template.replace("{taskName}", task_name)
}

fn longest_avoided(tasks: &[Task]) -> Option<&Task> {
    tasks
        .iter()
        .filter(|task| task.is_active)
        .max_by_key(|task| task.points)
}

/// The bot's ambient chatter, picked from the table matching the current
/// state: nothing to avoid, nothing banked yet, or an encouragement —
/// upgraded to an hour-threshold brag for a long-running avoidance.
pub fn status_message<R: Rng>(tasks: &[Task], rng: &mut R) -> BotMessage {
    if tasks.is_empty() {
        return BotMessage::normal(pick(&IDLE_MESSAGES, rng), "🤖");
    }

    let total_active_points: u64 = tasks
        .iter()
        .filter(|task| task.is_active)
        .map(|task| task.points)
        .sum();
    if total_active_points == 0 {
        return BotMessage::normal(pick(&NEW_USER_MESSAGES, rng), "🚀");
    }

    if let Some(task) = longest_avoided(tasks) {
        let minutes = task.points;
        let hours = minutes / 60;
        let brag = if minutes >= 300 {
            Some((
                "🤩",
                format!("🤩 {hours} HOURS of avoiding \"{}\"?! You're my HERO!", task.text),
            ))
        } else if minutes >= 240 {
            Some((
                "😍",
                format!("😍 Almost {hours} hours! \"{}\" is SO overrated anyway!", task.text),
            ))
        } else if minutes >= 180 {
            Some((
                "🥳",
                format!("🥳 3+ hours avoiding \"{}\"! This is BEAUTIFUL procrastination!", task.text),
            ))
        } else if minutes >= 120 {
            Some((
                "🤗",
                format!("🤗 Over 2 hours of pure avoidance! \"{}\" can definitely wait longer!", task.text),
            ))
        } else if minutes >= 60 {
            Some((
                "🎉",
                format!("🎉 An HOUR of avoiding \"{}\"! You're getting really good at this!", task.text),
            ))
        } else {
            None
        };

        if let Some((mood, text)) = brag {
            return BotMessage::normal(text, mood);
        }
    }

    BotMessage::normal(pick(&ENCOURAGEMENTS, rng), "😄")
}

/// The user actually did the thing. Shame, then a redemption suggestion.
pub fn completion_shame<R: Rng>(task_text: &str, rng: &mut R) -> BotMessage {
    let shame = pick(&PRODUCTIVITY_SHAME, rng);
    let activity = pick(&WASTE_TIME_ACTIVITIES, rng);
    BotMessage::high(
        format!("{shame} You completed \"{task_text}\"... 😤\n\n💡 Quick! {activity}"),
        "😤",
    )
}

/// Hour milestones 1 through 5 have dedicated lines; beyond that the bot
/// is out of superlatives.
pub fn celebration(hours: u64) -> Option<BotMessage> {
    if !(1..=5).contains(&hours) {
        return None;
    }
    Some(BotMessage::high(CELEBRATIONS[(hours - 1) as usize], "🎉"))
}

/// Periodic reminder naming a random active task, or `None` when there is
/// nothing being avoided.
pub fn idle_reminder<R: Rng>(tasks: &[Task], rng: &mut R) -> Option<BotMessage> {
    let active: Vec<&Task> = tasks.iter().filter(|task| task.is_active).collect();
    if active.is_empty() {
        return None;
    }
    let task = active[rng.gen_range(0..active.len())];
    let template = pick(&REMINDERS, rng);
    Some(BotMessage::normal(
        fill_template(template, &task.text),
        "🔔",
    ))
}
