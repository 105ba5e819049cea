use super::*;
use super::mock::MockModel;

fn big_image() -> InlineImage {
    InlineImage::from_base64(&"A".repeat(200))
}

#[test]
fn inline_image_strips_data_url_prefix() {
    let image = InlineImage::from_base64("data:image/jpeg;base64,QUJD");
    assert_eq!(image.data, "QUJD");
    assert_eq!(image.mime_type, "image/jpeg");

    let raw = InlineImage::from_base64("QUJD");
    assert_eq!(raw.data, "QUJD");
    assert_eq!(raw.mime_type, "image/png");
    assert!(!raw.is_substantial());
    assert!(big_image().is_substantial());
}

#[test]
fn payload_of_exactly_the_minimum_is_blank() {
    let at_limit = InlineImage::from_base64(&"A".repeat(prompts::MIN_IMAGE_PAYLOAD));
    let above = InlineImage::from_base64(&"A".repeat(prompts::MIN_IMAGE_PAYLOAD + 1));
    assert!(!at_limit.is_substantial());
    assert!(above.is_substantial());
}

#[test]
fn inline_image_from_png_bytes() {
    let image = InlineImage::from_png(b"ABC");
    assert_eq!(image.data, "QUJD");
    assert_eq!(image.mime_type, "image/png");
}

#[tokio::test]
async fn question_is_trimmed_and_prompt_names_class() {
    let tutor = Tutor::new(MockModel::replying(&["  Solve for x: 3x + 4 = 19\n"]));
    let question = tutor.generate_question("Maths", 8).await.unwrap();

    assert_eq!(question, "Solve for x: 3x + 4 = 19");
    let (prompt, image) = tutor.model().last_call();
    assert!(prompt.contains("Class 8"));
    assert!(prompt.contains("Request ID:"));
    assert!(
        prompts::QUESTION_TOPICS
            .iter()
            .any(|topic| prompt.contains(topic))
    );
    assert!(image.is_none());
}

#[tokio::test]
async fn question_failure_has_friendly_message() {
    let tutor = Tutor::new(MockModel::failing());
    let err = tutor.generate_question("Maths", 10).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to generate question. Please check your API key and internet connection."
    );
    match err {
        TutorError::Question(inner) => {
            assert!(matches!(*inner, TutorError::Api { status: 500, .. }))
        }
        other => panic!("expected Question error, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_question_reply_is_an_error() {
    let tutor = Tutor::new(MockModel::replying(&["   "]));
    assert!(tutor.generate_question("Maths", 9).await.is_err());
}

#[tokio::test]
async fn hint_with_drawing_sends_image() {
    let tutor = Tutor::new(MockModel::replying(&["**Next**, divide both sides by 3."]));
    let image = big_image();
    let hint = tutor.generate_hint("Solve 3x = 9", Some(&image)).await.unwrap();

    assert_eq!(hint, "Next, divide both sides by 3.");
    let (prompt, sent) = tutor.model().last_call();
    assert!(prompt.contains("STUDENT'S CURRENT WORK"));
    assert_eq!(sent, Some(image));
}

#[tokio::test]
async fn hint_with_tiny_image_is_general() {
    let tutor = Tutor::new(MockModel::replying(&["Start by isolating x."]));
    let tiny = InlineImage::from_base64("QUJD");
    tutor.generate_hint("Solve 3x = 9", Some(&tiny)).await.unwrap();

    let (prompt, sent) = tutor.model().last_call();
    assert!(!prompt.contains("STUDENT'S CURRENT WORK"));
    assert!(sent.is_none());
}

#[tokio::test]
async fn hint_failure_message() {
    let tutor = Tutor::new(MockModel::failing());
    let err = tutor.generate_hint("q", None).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to generate hint. Please try again.");
}

#[tokio::test]
async fn verify_parses_json_reply() {
    let tutor = Tutor::new(MockModel::replying(&[
        r#"Here you go: {"isCorrect": true, "feedback": "I can see x = 5. Correct!", "correctAnswer": "x = 5"}"#,
    ]));
    let image = big_image();
    let verdict = tutor.verify_answer("Solve 2x = 10", &image).await.unwrap();

    assert_eq!(
        verdict,
        Verdict {
            is_correct: true,
            feedback: "I can see x = 5. Correct!".to_string(),
            correct_answer: Some("x = 5".to_string()),
        }
    );
    let (prompt, sent) = tutor.model().last_call();
    assert!(prompt.contains("Solve 2x = 10"));
    assert_eq!(sent, Some(image));
}

#[tokio::test]
async fn verify_failure_message() {
    let tutor = Tutor::new(MockModel::failing());
    let err = tutor.verify_answer("q", &big_image()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to verify answer. Please try again.");
}

#[test]
fn verdict_serializes_in_camel_case() {
    let verdict = Verdict {
        is_correct: false,
        feedback: "Check step 2.".to_string(),
        correct_answer: None,
    };
    let json = serde_json::to_string(&verdict).unwrap();
    assert_eq!(json, r#"{"isCorrect":false,"feedback":"Check step 2."}"#);
}
