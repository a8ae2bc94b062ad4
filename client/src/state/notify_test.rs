use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut queue = NotificationQueue::default();
    let a = queue.success("Produk berhasil ditambahkan");
    let b = queue.error("Error", Some("Gagal mengambil data produk."));
    assert!(b > a);
    assert_eq!(queue.notices().len(), 2);
    assert_eq!(queue.notices()[1].kind, NoticeKind::Error);
    assert_eq!(queue.notices()[1].description.as_deref(), Some("Gagal mengambil data produk."));
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut queue = NotificationQueue::default();
    let a = queue.success("one");
    let b = queue.success("two");
    assert!(queue.dismiss(a));
    assert_eq!(queue.notices().len(), 1);
    assert_eq!(queue.notices()[0].id, b);
}

#[test]
fn dismiss_twice_is_noop() {
    let mut queue = NotificationQueue::default();
    let id = queue.success("one");
    assert!(queue.dismiss(id));
    assert!(!queue.dismiss(id));
    assert!(queue.is_empty());
}

#[test]
fn overflow_drops_oldest() {
    let mut queue = NotificationQueue::default();
    let first = queue.success("0");
    for i in 1..=MAX_NOTICES {
        queue.success(&i.to_string());
    }
    assert_eq!(queue.notices().len(), MAX_NOTICES);
    assert!(queue.notices().iter().all(|n| n.id != first));
}
