// Host-side tests for contact payload formatting and the relay state machine.

use folio_core::constants::CONTACT_WHATSAPP_NUMBER;
use folio_core::contact::*;
use folio_core::FolioError;
use std::collections::HashMap;

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn submission(map: &HashMap<String, String>) -> folio_core::Result<ContactSubmission> {
    ContactSubmission::from_fields(|name| map.get(name).cloned())
}

fn sample() -> HashMap<String, String> {
    fields(&[
        ("name", "A"),
        ("email", "a@b.com"),
        ("project-type", "web"),
        ("message", "hi"),
    ])
}

fn scheduled(effects: &[RelayEffect]) -> Vec<(RelayEvent, u32)> {
    effects
        .iter()
        .filter_map(|e| match e {
            RelayEffect::Schedule { event, after_ms } => Some((*event, *after_ms)),
            _ => None,
        })
        .collect()
}

#[test]
fn missing_budget_reads_not_specified() {
    let s = submission(&sample()).unwrap();
    assert_eq!(s.budget, None);
    let msg = s.format_message();
    assert!(msg.contains("Not specified"));
    assert_eq!(
        msg,
        "*New Project Inquiry*\n\n*Name:* A\n*Email:* a@b.com\n*Project Type:* web\n\
         *Budget:* Not specified\n\n*Message:*\nhi"
    );
}

#[test]
fn blank_budget_counts_as_missing() {
    let mut map = sample();
    map.insert("budget".into(), "   ".into());
    assert_eq!(submission(&map).unwrap().budget_or_default(), "Not specified");

    map.insert("budget".into(), "$5k".into());
    let s = submission(&map).unwrap();
    assert!(s.format_message().contains("*Budget:* $5k"));
}

#[test]
fn missing_required_field_is_an_error() {
    let mut map = sample();
    map.remove("email");
    assert_eq!(submission(&map), Err(FolioError::MissingField("email")));
}

#[test]
fn link_targets_whatsapp_with_encoded_text() {
    let url = submission(&sample())
        .unwrap()
        .whatsapp_url(CONTACT_WHATSAPP_NUMBER);
    assert!(url.starts_with("https://wa.me/94764092662?text="));
    let text = url.split_once("?text=").unwrap().1;
    assert!(!text.contains(' ') && !text.contains('\n'));
    assert!(text.contains("Not%20specified"));
    assert!(text.contains("a%40b.com"));
}

#[test]
fn successful_submission_walks_to_idle_and_opens_link() {
    let mut relay = ContactRelay::default();
    let fx = relay.submit(submission(&sample())).unwrap();
    assert_eq!(relay.state(), RelayState::Pending);
    assert_eq!(fx[0], RelayEffect::DisableSubmit);
    assert_eq!(fx[1], RelayEffect::ShowLabel(SubmitLabel::Sending));
    assert_eq!(scheduled(&fx), vec![(RelayEvent::DelayElapsed, 1500)]);

    let fx = relay.advance(RelayEvent::DelayElapsed).unwrap();
    assert_eq!(relay.state(), RelayState::Sent);
    assert_eq!(fx[0], RelayEffect::ShowLabel(SubmitLabel::Sent));
    assert_eq!(
        scheduled(&fx),
        vec![(RelayEvent::LinkDue, 500), (RelayEvent::ResetDue, 3000)]
    );

    let fx = relay.advance(RelayEvent::LinkDue).unwrap();
    match fx.as_slice() {
        [RelayEffect::OpenLink(url)] => {
            assert!(url.starts_with("https://wa.me/94764092662?text="));
            assert!(url.contains("Not%20specified"));
        }
        other => panic!("expected one OpenLink, got {other:?}"),
    }

    let fx = relay.advance(RelayEvent::ResetDue).unwrap();
    assert_eq!(fx, vec![RelayEffect::ResetForm, RelayEffect::RestoreSubmit]);
    assert_eq!(relay.state(), RelayState::Idle);
}

#[test]
fn resubmission_while_pending_is_rejected() {
    let mut relay = ContactRelay::default();
    relay.submit(submission(&sample())).unwrap();
    assert_eq!(
        relay.submit(submission(&sample())),
        Err(FolioError::RelayBusy)
    );
    relay.advance(RelayEvent::DelayElapsed).unwrap();
    assert_eq!(
        relay.submit(submission(&sample())),
        Err(FolioError::RelayBusy)
    );
    relay.advance(RelayEvent::ResetDue).unwrap();
    assert!(relay.submit(submission(&sample())).is_ok());
}

#[test]
fn invalid_fields_show_error_then_recover() {
    let mut relay = ContactRelay::default();
    let fx = relay.submit(Err(FolioError::MissingField("name"))).unwrap();
    assert_eq!(relay.state(), RelayState::Failed);
    assert!(fx.contains(&RelayEffect::ShowLabel(SubmitLabel::Error)));
    assert_eq!(scheduled(&fx), vec![(RelayEvent::ResetDue, 3000)]);

    let fx = relay.advance(RelayEvent::ResetDue).unwrap();
    assert_eq!(fx, vec![RelayEffect::RestoreSubmit]);
    assert_eq!(relay.state(), RelayState::Idle);
}

#[test]
fn failing_a_pending_submission_never_opens_the_link() {
    let mut relay = ContactRelay::default();
    relay.submit(submission(&sample())).unwrap();
    let fx = relay.fail().unwrap();
    assert_eq!(fx[0], RelayEffect::ShowLabel(SubmitLabel::Error));
    assert_eq!(relay.state(), RelayState::Failed);

    assert!(relay.advance(RelayEvent::LinkDue).is_err());
    relay.advance(RelayEvent::ResetDue).unwrap();
    assert!(relay.fail().is_err());
}

#[test]
fn failing_after_sent_still_returns_to_idle() {
    let mut relay = ContactRelay::default();
    relay.submit(submission(&sample())).unwrap();
    relay.advance(RelayEvent::DelayElapsed).unwrap();
    assert_eq!(relay.state(), RelayState::Sent);

    let fx = relay.fail().unwrap();
    assert_eq!(fx[0], RelayEffect::ShowLabel(SubmitLabel::Error));
    assert_eq!(scheduled(&fx), vec![(RelayEvent::ResetDue, 3000)]);
    assert_eq!(relay.state(), RelayState::Failed);

    // the link timer may still land; nothing opens
    assert!(relay.advance(RelayEvent::LinkDue).is_err());
    let fx = relay.advance(RelayEvent::ResetDue).unwrap();
    assert_eq!(fx, vec![RelayEffect::RestoreSubmit]);
    assert_eq!(relay.state(), RelayState::Idle);
    assert!(relay.submit(submission(&sample())).is_ok());
}

#[test]
fn failed_relay_cannot_fail_again_but_can_reset() {
    let mut relay = ContactRelay::default();
    relay.submit(submission(&fields(&[]))).unwrap();
    assert_eq!(relay.state(), RelayState::Failed);
    assert!(relay.fail().is_err());
    let fx = relay.advance(RelayEvent::ResetDue).unwrap();
    assert_eq!(fx, vec![RelayEffect::RestoreSubmit]);
    assert_eq!(relay.state(), RelayState::Idle);
}

#[test]
fn out_of_order_events_are_rejected() {
    let mut relay = ContactRelay::default();
    match relay.advance(RelayEvent::ResetDue) {
        Err(FolioError::InvalidTransition { state, event }) => {
            assert_eq!(state, "idle");
            assert_eq!(event, "reset-due");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn custom_timings_flow_into_schedules() {
    let timings = RelayTimings {
        submit_delay_ms: 10,
        link_open_delay_ms: 20,
        reset_delay_ms: 30,
    };
    let mut relay = ContactRelay::new("15550001111", timings);
    let fx = relay.submit(submission(&sample())).unwrap();
    assert_eq!(scheduled(&fx), vec![(RelayEvent::DelayElapsed, 10)]);
    let fx = relay.advance(RelayEvent::DelayElapsed).unwrap();
    assert_eq!(
        scheduled(&fx),
        vec![(RelayEvent::LinkDue, 20), (RelayEvent::ResetDue, 30)]
    );
    match relay.advance(RelayEvent::LinkDue).unwrap().as_slice() {
        [RelayEffect::OpenLink(url)] => assert!(url.starts_with("https://wa.me/15550001111?")),
        other => panic!("{other:?}"),
    }
}
