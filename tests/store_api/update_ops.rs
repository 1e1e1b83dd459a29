//! Update operations
//!
//! Both update disciplines only compute. These tests pin that down and
//! cover the commit step that persists a computed result.

use crate::*;
use std::convert::Infallible;

// =============================================================================
// update_by_data
// =============================================================================

#[test]
fn test_merge_at_root_is_compute_only() {
    let mut store = create_store();
    let original = obj([("a", Value::Int(0)), ("b", Value::Int(2))]);
    put(&mut store, "k", original.clone());

    let out = store.update_by_data(UpdateByDataPayload::new(
        "k",
        Path::root(),
        obj([("a", Value::Int(1))]),
    ));

    assert_eq!(out.method, Method::Update);
    assert_eq!(out.data, obj([("a", Value::Int(1)), ("b", Value::Int(2))]));
    assert_eq!(read(&store, "k", "$"), original);
}

#[test]
fn test_merge_nested_objects() {
    let mut store = create_store();
    put(
        &mut store,
        "profile",
        obj([(
            "user",
            obj([("name", Value::from("Eve")), ("age", Value::Int(25))]),
        )]),
    );

    let out = store.update_by_data(UpdateByDataPayload::new(
        "profile",
        Path::root(),
        obj([("user", obj([("age", Value::Int(26))]))]),
    ));

    assert_eq!(
        out.data,
        obj([(
            "user",
            obj([("name", Value::from("Eve")), ("age", Value::Int(26))]),
        )])
    );
}

#[test]
fn test_merge_at_path() {
    let mut store = create_store();
    put(&mut store, "doc", obj([("meta", obj([("v", Value::Int(1))]))]));

    let out = store.update_by_data(UpdateByDataPayload::new(
        "doc",
        path("meta"),
        obj([("tag", Value::from("t"))]),
    ));
    assert_eq!(
        out.data,
        obj([("v", Value::Int(1)), ("tag", Value::from("t"))])
    );
}

#[test]
fn test_merge_non_object_input_replaces() {
    let mut store = create_store();
    put(&mut store, "k", obj([("a", Value::Int(1))]));

    let out = store.update_by_data(UpdateByDataPayload::new("k", Path::root(), "plain"));
    assert_eq!(out.data, Value::from("plain"));
}

#[test]
fn test_merge_onto_missing_key() {
    let store = create_store();
    let input = obj([("a", Value::Int(1))]);
    let out = store.update_by_data(UpdateByDataPayload::new("nope", Path::root(), input.clone()));

    assert_eq!(out.data, input);
    assert_eq!(store.size(SizePayload::new()).data, 0);
}

#[test]
fn test_commit_persists_merge() {
    let mut store = create_store();
    put(&mut store, "k", obj([("a", Value::Int(0)), ("b", Value::Int(2))]));

    let update = store.update_by_data(UpdateByDataPayload::new(
        "k",
        Path::root(),
        obj([("a", Value::Int(1))]),
    ));
    let set = store.commit(update);

    assert_eq!(set.method, Method::Set);
    assert_eq!(
        read(&store, "k", "$"),
        obj([("a", Value::Int(1)), ("b", Value::Int(2))])
    );
}

// =============================================================================
// update_by_hook
// =============================================================================

#[tokio::test]
async fn test_hook_receives_current_value() {
    let mut store = create_store();
    put(&mut store, "counter", obj([("n", Value::Int(9))]));

    let out = store
        .update_by_hook(UpdateByHookPayload::new("counter", path("n")), |current| async move {
            Ok::<_, Infallible>(Value::Int(current.as_int().unwrap_or(0) * 2))
        })
        .await
        .unwrap();

    assert_eq!(out.data, Value::Int(18));
    assert_eq!(read(&store, "counter", "n"), Value::Int(9));
}

#[tokio::test]
async fn test_hook_on_missing_key_gets_null() {
    let store = create_store();
    let out = store
        .update_by_hook(UpdateByHookPayload::new("nope", Path::root()), |current| async move {
            assert!(current.is_null());
            Ok::<_, Infallible>(Value::from("created"))
        })
        .await
        .unwrap();
    assert_eq!(out.data, Value::from("created"));
}

#[tokio::test]
async fn test_hook_error_leaves_store_untouched() {
    let mut store = create_store();
    put(&mut store, "k", 1);

    let result = store
        .update_by_hook(UpdateByHookPayload::new("k", Path::root()), |_| async {
            Err::<Value, String>("hook failed".to_string())
        })
        .await;

    assert_eq!(result.unwrap_err(), "hook failed");
    assert_eq!(read(&store, "k", "$"), Value::Int(1));
}

#[tokio::test]
async fn test_hook_result_commits() {
    let mut store = create_store();
    put(&mut store, "k", Value::array());

    let update = store
        .update_by_hook(UpdateByHookPayload::new("k", Path::root()), |current| async move {
            let mut items = current.as_array().map(<[Value]>::to_vec).unwrap_or_default();
            items.push(Value::from("appended"));
            Ok::<_, Infallible>(Value::Array(items))
        })
        .await
        .unwrap();
    store.commit(update);

    assert_eq!(
        read(&store, "k", "$"),
        Value::Array(vec![Value::from("appended")])
    );
}

#[tokio::test]
async fn test_hook_suspended_across_yield() {
    let mut store = create_store();
    put(&mut store, "k", 1);

    let pending = store.update_by_hook(UpdateByHookPayload::new("k", Path::root()), |current| {
        async move {
            tokio::task::yield_now().await;
            Ok::<_, Infallible>(current)
        }
    });

    // The store stays usable while the hook is pending
    put(&mut store, "k", 2);
    put(&mut store, "other", 3);

    let out = pending.await.unwrap();
    assert_eq!(out.data, Value::Int(1));
    assert_eq!(read(&store, "k", "$"), Value::Int(2));
}

#[tokio::test]
async fn test_stale_hook_commit_overwrites_newer_write() {
    let mut store = create_store();
    put(&mut store, "k", 1);

    let pending = store.update_by_hook(UpdateByHookPayload::new("k", Path::root()), |current| {
        async move { Ok::<_, Infallible>(Value::Int(current.as_int().unwrap_or(0) + 10)) }
    });
    put(&mut store, "k", 100);

    let update = pending.await.unwrap();
    store.commit(update);

    assert_eq!(read(&store, "k", "$"), Value::Int(11));
}
