//! The professional excuse generator. A fixed table, a uniform pick.

use rand::Rng;

pub const EXCUSES: [&str; 20] = [
    "Mercury is in retrograde, affecting my productivity chakras.",
    "I'm letting my subconscious process the task for optimal results.",
    "I'm practicing the ancient art of strategic delay.",
    "My productivity energy is recharging for maximum efficiency later.",
    "I'm waiting for the perfect alignment of motivation and opportunity.",
    "I'm giving others a chance to step up and shine.",
    "I'm conducting important research on alternative approaches.",
    "My intuition says the timing isn't quite right yet.",
    "I'm building anticipation for when I finally tackle this task.",
    "I'm preserving my mental energy for more critical tasks.",
    "I'm in a creative incubation period right now.",
    "The universe is clearly not ready for me to complete this yet.",
    "I'm practicing mindful procrastination as a form of meditation.",
    "I'm waiting for technology to advance and make this easier.",
    "I'm giving myself time to approach this with fresh perspective.",
    "I'm honoring my natural rhythms and energy cycles.",
    "I'm conducting a thorough risk assessment first.",
    "I'm waiting for inspiration to strike organically.",
    "I'm building character through delayed gratification.",
    "I'm optimizing for long-term success over short-term action.",
];

pub fn random_excuse<R: Rng>(rng: &mut R) -> &'static str {
    EXCUSES[rng.gen_range(0..EXCUSES.len())]
}
