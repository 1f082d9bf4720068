use super::*;
use dreams_shared::UserIdentity;

fn identity(uid: &str, email: &str) -> UserIdentity {
    UserIdentity {
        uid: uid.to_string(),
        email: email.to_string(),
        display_name: None,
    }
}

#[test]
fn test_subscription_receives_emissions() {
    let broadcast = SessionBroadcast::new();
    let seen: Arc<Mutex<Vec<Session>>> = Arc::new(Mutex::new(Vec::new()));

    let seen_cb = seen.clone();
    let _sub = broadcast.subscribe(Arc::new(move |s| seen_cb.lock().unwrap().push(s)));

    broadcast.emit(&Session::Anonymous);
    broadcast.emit(&Session::Authenticated(identity("u1", "a@b.com")));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], Session::Anonymous);
    assert!(seen[1].is_authenticated());
}

#[test]
fn test_dropped_subscription_stops_receiving() {
    let broadcast = SessionBroadcast::new();
    let seen: Arc<Mutex<Vec<Session>>> = Arc::new(Mutex::new(Vec::new()));

    let seen_cb = seen.clone();
    let sub = broadcast.subscribe(Arc::new(move |s| seen_cb.lock().unwrap().push(s)));

    broadcast.emit(&Session::Anonymous);
    drop(sub);
    broadcast.emit(&Session::Authenticated(identity("u1", "a@b.com")));

    // Only the emission before the drop was delivered
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_multiple_subscribers_all_notified() {
    let broadcast = SessionBroadcast::new();
    let first = Arc::new(Mutex::new(0));
    let second = Arc::new(Mutex::new(0));

    let f = first.clone();
    let _sub_a = broadcast.subscribe(Arc::new(move |_| *f.lock().unwrap() += 1));
    let s = second.clone();
    let _sub_b = broadcast.subscribe(Arc::new(move |_| *s.lock().unwrap() += 1));

    broadcast.emit(&Session::Anonymous);

    assert_eq!(*first.lock().unwrap(), 1);
    assert_eq!(*second.lock().unwrap(), 1);
}
