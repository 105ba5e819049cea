//! Prompt templates sent to the generative model.

/// Topics rotated through so consecutive questions differ.
pub const QUESTION_TOPICS: [&str; 10] = [
    "algebra and linear equations",
    "geometry and mensuration",
    "arithmetic and percentages",
    "quadratic equations",
    "triangles and angles",
    "number systems and fractions",
    "ratios and proportions",
    "simple and compound interest",
    "profit and loss",
    "time, speed and distance",
];

/// Base64 payloads at or below this length are treated as an empty board.
pub const MIN_IMAGE_PAYLOAD: usize = 100;

pub fn question_prompt(subject: &str, class_level: u8, topic: &str, request_id: i64) -> String {
    format!(
        "You are a {subject} teacher writing a NEW practice question for Class {class_level} students.\n\
         \n\
         Every request must produce a DIFFERENT question: pick fresh numbers and a fresh scenario. \
         (Request ID: {request_id})\n\
         \n\
         Topic: {topic}\n\
         \n\
         Requirements:\n\
         - Exactly ONE clearly worded problem suitable for Class {class_level}\n\
         - Avoid the numbers used in textbook examples\n\
         - Solvable by hand in 3 to 5 steps\n\
         - Do NOT include the answer or any working\n\
         - Prefer a practical, everyday setting\n\
         - Vary the difficulty within the Class {class_level} syllabus\n\
         \n\
         Styles you may adapt (always with your own numbers):\n\
         - Linear equations: \"Solve for x: [a]x + [b] = [c]\"\n\
         - Geometry: \"Find the area of a [shape] with [dimensions]\"\n\
         - Word problems: \"If [n] items cost ₹[amount], what do [m] items cost?\"\n\
         - Percentages: \"What is [p]% of [number]?\"\n\
         \n\
         Write the question now:"
    )
}

/// Hint prompt used when the student's board is attached as an image.
pub fn contextual_hint_prompt(question: &str) -> String {
    format!(
        "You are a mathematics teacher giving a hint to a student who is stuck.\n\
         \n\
         QUESTION:\n{question}\n\
         \n\
         STUDENT'S CURRENT WORK:\n\
         The attached image is the student's whiteboard. Read what they have written or drawn.\n\
         \n\
         INSTRUCTIONS:\n\
         1. Look carefully at the work on the whiteboard.\n\
         2. Decide how far they have got and whether they are on the right track.\n\
         3. If they are making progress, say what they did right and name the NEXT step.\n\
         4. If the approach is wrong, say gently what is wrong and which idea to use instead.\n\
         5. If they have barely started, tell them where to BEGIN and which concept matters.\n\
         6. At most 2 to 4 sentences, in simple and encouraging language.\n\
         7. Never state the final answer or numerical result.\n\
         \n\
         Write the hint for their current work:"
    )
}

/// Hint prompt used when there is no usable whiteboard image.
pub fn general_hint_prompt(question: &str) -> String {
    format!(
        "You are a mathematics teacher giving a hint to a student who is stuck.\n\
         \n\
         QUESTION:\n{question}\n\
         \n\
         INSTRUCTIONS:\n\
         1. Point towards the method or key concept without solving the problem.\n\
         2. Tell them where to START.\n\
         3. At most 2 to 3 sentences, in simple and encouraging language.\n\
         4. Never state the final answer or numerical result.\n\
         \n\
         Write a hint to get them started:"
    )
}

pub fn verify_prompt(question: &str) -> String {
    format!(
        "You are a mathematics teacher marking a student's handwritten solution on a whiteboard.\n\
         \n\
         You MUST base your judgement on the attached image. Read exactly what the student wrote.\n\
         \n\
         QUESTION:\n{question}\n\
         \n\
         INSTRUCTIONS:\n\
         1. Start by describing what you can see: numbers, equations and working.\n\
         2. Check whether the written answer matches the correct solution.\n\
         3. Check the working and method.\n\
         4. Decide CORRECT or INCORRECT from what is actually written.\n\
         \n\
         Reply with JSON in exactly this shape:\n\
         {{\n  \"isCorrect\": true,\n  \"feedback\": \"What you see in the image, then your assessment of the solution\",\n  \"correctAnswer\": \"The correct answer with solution steps\"\n}}\n\
         \n\
         JSON RULES:\n\
         - Valid JSON only, with every string properly escaped\n\
         - Plain text inside strings, no markdown\n\
         - Use \\\\n for line breaks and \\\\\" for quotes inside strings\n\
         - Write \"x\" for multiplication and \"/\" for division\n\
         - No control characters\n\
         \n\
         Do not guess. If the answer is wrong, say so plainly. If the handwriting is unreadable, say that."
    )
}
