//! Praise shown after a correct answer.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const PHRASES: &[&str] = &[
    "You’re on the right track now!",
    "You’ve got it made.",
    "That’s right!",
    "That’s good.",
    "I’m very proud of you.",
    "You’re really working hard today.",
    "You are very good at that.",
    "That’s coming along nicely.",
    "Good work!",
    "I’m happy to see you working like that.",
    "That’s much, much better!",
    "Exactly right.",
    "I’m proud of the way you worked today.",
    "You’re doing that much better today.",
    "You’ve just about got it.",
    "That’s the best you’ve ever done.",
    "You’re doing a good job.",
    "That’s it!",
    "Now you’ve figured it out.",
    "That’s quite an improvement.",
    "Great!",
    "I knew you could do it.",
    "Congratulations!",
    "Not bad.",
    "Keep working on it.",
    "You’re improving.",
    "Now you have it!",
    "You are learning fast.",
    "Good for you!",
    "Couldn’t have done it better myself.",
    "Aren’t you proud of yourself?",
    "One more time and you’ll have it.",
    "You really make my job fun.",
    "That’s the right way to do it.",
    "You’re getting better every day.",
    "You did it that time!",
    "That’s not half bad.",
    "Nice going.",
    "You haven’t missed a thing!",
    "Wow!",
    "That’s the way!",
    "Keep up the good work.",
    "Terrific!",
    "Nothing can stop you now.",
    "That’s the way to do it.",
    "Sensational!",
    "You’ve got your brain in gear today.",
    "That’s better.",
    "That was first class work.",
    "Excellent!",
    "That’s the best ever.",
    "You’ve just about mastered it.",
    "Perfect!",
    "That’s better than ever.",
    "Much better!",
    "Wonderful!",
    "You must have been practicing.",
    "You did that very well.",
    "Fine!",
    "You’re really going to town.",
    "Outstanding!",
    "Fantastic!",
    "Tremendous!",
    "That’s how to handle that.",
    "Now that’s what I call a fine job.",
    "That’s great.",
    "Right on!",
    "You’re really improving.",
    "You’re doing beautifully!",
    "Superb!",
    "Good remembering.",
    "You’ve got that down pat.",
    "You certainly did well today.",
    "Keep it up!",
    "Congratulations. You got it right!",
    "You did a lot of work today.",
    "Well look at you go.",
    "I like knowing you.",
    "Marvelous!",
    "I like that.",
    "Way to go!",
    "Now you have the hang of it.",
    "You’re doing fine!",
    "Good thinking.",
    "You are really learning a lot.",
    "Good going.",
    "I’ve never seen anyone do it better.",
    "Keep on trying.",
    "You outdid yourself today!",
    "I think you’ve got it now.",
    "You figured that out fast.",
    "You remembered!",
    "That’s really nice.",
    "That kind of work makes me happy.",
];

/// Pick a phrase uniformly at random.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PHRASES.choose(rng).copied().unwrap_or("Correct!")
}
