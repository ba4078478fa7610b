pub mod mock;

use companion_affect::api::{
    classify_text, clear_transcript, create_chat_session, describe_intensity, free_api_result, get_character_state,
    get_session_config, get_transcript, record_ai_reply, remove_chat_session, send_user_message,
};
use std::ptr;

use mock::{c_string, take_api_result};

fn create_session(config_json: Option<&str>) -> String {
    let config = config_json.map(c_string);
    let config_ptr = config.as_ref().map(|c| c.as_ptr()).unwrap_or(ptr::null());

    let response = take_api_result(create_chat_session(config_ptr));
    assert!(response.success, "create failed: {:?}", response.error);

    let data: serde_json::Value = serde_json::from_str(&response.data.unwrap()).unwrap();
    data["session_id"].as_str().unwrap().to_string()
}

#[test]
fn test_classify_text_endpoint() {
    let text = c_string("I am so happy and excited!!!");
    let response = take_api_result(classify_text(text.as_ptr()));
    assert!(response.success);

    let data: serde_json::Value = serde_json::from_str(&response.data.unwrap()).unwrap();
    assert_eq!(data["primaryEmotion"], "excited");
    assert_eq!(data["intensityLabel"], "intense");
    assert_eq!(data["shouldAnimate"], true);
}

#[test]
fn test_classify_text_null_pointer() {
    let response = take_api_result(classify_text(ptr::null()));
    assert!(!response.success);
    assert!(response.error.unwrap().contains("is null"));
}

#[test]
fn test_describe_intensity_endpoint() {
    let emotion = c_string("sad");
    let response = take_api_result(describe_intensity(emotion.as_ptr(), 0.45));
    assert_eq!(response.data.as_deref(), Some("moderate"));

    let unknown = c_string("bored");
    let response = take_api_result(describe_intensity(unknown.as_ptr(), 0.45));
    assert!(!response.success);
}

#[test]
fn test_session_lifecycle() {
    let session_id = create_session(None);
    let session_ptr = c_string(&session_id);

    let text = c_string("I'm worried about the exam");
    let response = take_api_result(send_user_message(session_ptr.as_ptr(), text.as_ptr()));
    assert!(response.success, "send failed: {:?}", response.error);
    let outcome: serde_json::Value = serde_json::from_str(&response.data.unwrap()).unwrap();
    assert_eq!(outcome["message"]["emotion"], "worried");
    assert_eq!(outcome["animated"], true);

    let response = take_api_result(get_character_state(session_ptr.as_ptr()));
    let state: serde_json::Value = serde_json::from_str(&response.data.unwrap()).unwrap();
    assert_eq!(state["emotion"], "worried");
    assert_eq!(state["currentAnimation"], "worried");

    let reply = c_string("Don't worry, you'll do great!");
    let response = take_api_result(record_ai_reply(session_ptr.as_ptr(), reply.as_ptr()));
    assert!(response.success);

    let response = take_api_result(record_ai_reply(session_ptr.as_ptr(), ptr::null()));
    let outcome: serde_json::Value = serde_json::from_str(&response.data.unwrap()).unwrap();
    assert!(outcome["message"]["text"].as_str().unwrap().contains("trouble connecting"));
    assert!(outcome["message"].get("emotion").is_none());
    assert_eq!(outcome["animated"], false);

    let response = take_api_result(get_transcript(session_ptr.as_ptr()));
    let transcript: serde_json::Value = serde_json::from_str(&response.data.unwrap()).unwrap();
    assert_eq!(transcript.as_array().unwrap().len(), 3);
    assert_eq!(transcript[0]["sender"], "user");

    let response = take_api_result(clear_transcript(session_ptr.as_ptr()));
    assert!(response.success);
    let response = take_api_result(get_transcript(session_ptr.as_ptr()));
    assert_eq!(response.data.as_deref(), Some("[]"));

    let response = take_api_result(remove_chat_session(session_ptr.as_ptr()));
    assert!(response.success);

    let response = take_api_result(send_user_message(session_ptr.as_ptr(), text.as_ptr()));
    assert!(!response.success);
    assert!(response.error.unwrap().contains("not found"));

    let response = take_api_result(get_transcript(session_ptr.as_ptr()));
    assert!(!response.success);
    assert!(response.error.unwrap().contains("not found"));
}

#[test]
fn test_unknown_session_transcript() {
    let unknown = c_string("no-such-session");
    let response = take_api_result(get_transcript(unknown.as_ptr()));
    assert!(!response.success);
    assert!(response.data.is_none());
}

#[test]
fn test_get_session_config() {
    let session_id = create_session(Some(
        r#"{"character": {"name": "Aiko", "animation_speed": 1.5, "appearance": {"outfit": "kimono"}}}"#,
    ));
    let session_ptr = c_string(&session_id);

    let response = take_api_result(get_session_config(session_ptr.as_ptr()));
    assert!(response.success);
    let config: serde_json::Value = serde_json::from_str(&response.data.unwrap()).unwrap();
    assert_eq!(config["character"]["name"], "Aiko");
    assert_eq!(config["character"]["animation_speed"], 1.5);
    assert_eq!(config["character"]["appearance"]["outfit"], "kimono");
    assert_eq!(config["character"]["appearance"]["hair_color"], "#8B4513");
    assert_eq!(config["features"]["auto_response"], true);

    take_api_result(remove_chat_session(session_ptr.as_ptr()));
}

#[test]
fn test_create_session_with_config() {
    let session_id = create_session(Some(r#"{"character": {"name": "Aiko"}, "chat": {"max_messages": 1}}"#));
    let session_ptr = c_string(&session_id);

    for text in ["first", "second"] {
        let text = c_string(text);
        take_api_result(send_user_message(session_ptr.as_ptr(), text.as_ptr()));
    }

    let response = take_api_result(get_transcript(session_ptr.as_ptr()));
    let transcript: serde_json::Value = serde_json::from_str(&response.data.unwrap()).unwrap();
    assert_eq!(transcript.as_array().unwrap().len(), 1);
    assert_eq!(transcript[0]["text"], "second");

    take_api_result(remove_chat_session(session_ptr.as_ptr()));
}

#[test]
fn test_create_session_with_invalid_config() {
    let config = c_string(r#"{"animation": {"window_ms": 0}}"#);
    let response = take_api_result(create_chat_session(config.as_ptr()));
    assert!(!response.success);
    assert!(response.error.unwrap().contains("Invalid config"));

    let config = c_string("not json");
    let response = take_api_result(create_chat_session(config.as_ptr()));
    assert!(!response.success);
}

#[test]
fn test_empty_message_is_rejected() {
    let session_id = create_session(None);
    let session_ptr = c_string(&session_id);

    let text = c_string("   ");
    let response = take_api_result(send_user_message(session_ptr.as_ptr(), text.as_ptr()));
    assert!(!response.success);
    assert!(response.error.unwrap().contains("empty"));

    take_api_result(remove_chat_session(session_ptr.as_ptr()));
}

#[test]
fn test_free_null_result() {
    free_api_result(ptr::null_mut());
}
