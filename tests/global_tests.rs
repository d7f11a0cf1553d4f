//! Process-wide instance tests
//!
//! One test function only: the global facade is process state, so a
//! single flow keeps the assertions deterministic.

use crosstoast::global;

#[tokio::test]
async fn global_instance_initializes_once() {
    assert!(!global::is_initialized());

    global::initialize("dev.crosstoast.tests", "CrossToast Tests", None)
        .await
        .unwrap();
    assert!(global::is_initialized());

    let identity = global::identity().unwrap();
    assert_eq!(identity.app_id, "dev.crosstoast.tests");
    assert_eq!(identity.display_name, "CrossToast Tests");

    // Re-initialization is a no-op; the first identity sticks.
    global::initialize("dev.other", "Other", None).await.unwrap();
    assert_eq!(
        global::identity().unwrap().app_id,
        "dev.crosstoast.tests"
    );

    let subscription = global::subscribe(|_| {});
    global::unsubscribe(subscription);
}
