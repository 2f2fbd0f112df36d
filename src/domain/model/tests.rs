use super::*;

#[test]
fn clip_constructors_set_kind_and_content() {
    let silence = Clip::silence(1.0, 2.5);
    assert_eq!(silence.kind, ClipKind::Silence);
    assert!(silence.content.is_none());

    let filler = Clip::filler(3.0, 3.4, "um");
    assert_eq!(filler.kind, ClipKind::Filler);
    assert_eq!(filler.content.as_deref(), Some("um"));
}

#[test]
fn clip_duration() {
    assert_eq!(Clip::silence(1.0, 2.5).duration(), 1.5);
    assert_eq!(Clip::filler(3.0, 3.0, "uh").duration(), 0.0);
}

#[test]
fn interval_duration() {
    assert_eq!(Interval::new(0.5, 10.0).duration(), 9.5);
}

#[test]
fn clip_kind_display() {
    assert_eq!(ClipKind::Filler.to_string(), "filler");
    assert_eq!(ClipKind::Silence.to_string(), "silence");
}

#[test]
fn token_round_trips_through_json() {
    let json = r#"[{"text":"嗯","start":0.0,"end":0.5}]"#;
    let tokens: Vec<Token> = serde_json::from_str(json).unwrap();
    assert_eq!(tokens, vec![Token::new("嗯", 0.0, 0.5)]);
}
