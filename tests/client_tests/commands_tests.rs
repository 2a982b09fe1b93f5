//! Command Surface Tests
//!
//! Spot-checks across the command families: each wrapper must emit the
//! documented frame and decode with the selector its reply shape needs.

use std::io::Cursor;

use crimson::{Aggregate, Buffer, Reply, Session, SortOptions};

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

fn session(replies: &[u8]) -> TestSession {
    Session::new(Cursor::new(replies.to_vec()), Vec::new())
}

fn written(session: TestSession) -> Vec<u8> {
    session.into_parts().1
}

// =============================================================================
// String Commands
// =============================================================================

#[test]
fn test_get_frame_and_reply() {
    let mut session = session(b"$3\r\nval\r\n");
    let reply = session.get("foo").unwrap();

    assert_eq!(reply, Reply::Bulk(Buffer::from("val")));
    assert_eq!(written(session), b"*2\r\n$3\r\nGET\r\n$3\r\nfoo\r\n");
}

#[test]
fn test_get_missing_key_is_nil() {
    let mut session = session(b"$-1\r\n");
    assert!(session.get("missing").unwrap().is_nil());
}

#[test]
fn test_set_decodes_status_as_bool() {
    let mut session = session(b"+OK\r\n");
    let reply = session.set("k", "v").unwrap();
    assert_eq!(reply.as_bool().unwrap(), true);
}

#[test]
fn test_set_binary_value() {
    let mut session = session(b"+OK\r\n");
    session.set("bin", &[0u8, 1, 2][..]).unwrap();

    let mut expected = b"*3\r\n$3\r\nSET\r\n$3\r\nbin\r\n$3\r\n".to_vec();
    expected.extend_from_slice(&[0, 1, 2]);
    expected.extend_from_slice(b"\r\n");
    assert_eq!(written(session), expected);
}

#[test]
fn test_incr_by_decodes_integer() {
    let mut session = session(b":11\r\n");
    let reply = session.incr_by("counter", 10).unwrap();

    assert_eq!(reply.as_integer().unwrap(), 11);
    assert_eq!(
        written(session),
        b"*3\r\n$6\r\nINCRBY\r\n$7\r\ncounter\r\n$2\r\n10\r\n"
    );
}

#[test]
fn test_mget_frame() {
    let mut session = session(b"*2\r\n$1\r\na\r\n$-1\r\n");
    let keys = [Buffer::from("k1"), Buffer::from("k2")];
    let reply = session.mget(&keys).unwrap();

    assert_eq!(reply, Reply::List(vec![Buffer::from("a"), Buffer::new()]));
    assert_eq!(
        written(session),
        b"*3\r\n$4\r\nMGET\r\n$2\r\nk1\r\n$2\r\nk2\r\n"
    );
}

#[test]
fn test_mset_interleaves_pairs() {
    let mut session = session(b"+OK\r\n");
    let pairs = [
        (Buffer::from("a"), Buffer::from("1")),
        (Buffer::from("b"), Buffer::from("2")),
    ];
    session.mset(&pairs).unwrap();

    assert_eq!(
        written(session),
        b"*5\r\n$4\r\nMSET\r\n$1\r\na\r\n$1\r\n1\r\n$1\r\nb\r\n$1\r\n2\r\n"
    );
}

// =============================================================================
// Keyspace Commands
// =============================================================================

#[test]
fn test_ping() {
    let mut session = session(b"+PONG\r\n");
    let reply = session.ping().unwrap();
    assert_eq!(reply, Reply::Bulk(Buffer::from("PONG")));
}

#[test]
fn test_del_many_counts() {
    let mut session = session(b":2\r\n");
    let keys = [Buffer::from("a"), Buffer::from("b"), Buffer::from("c")];
    let reply = session.del_many(&keys).unwrap();
    assert_eq!(reply.as_integer().unwrap(), 2);
}

#[test]
fn test_exists_decodes_bool() {
    let mut session = session(b":0\r\n");
    assert_eq!(session.exists("nope").unwrap().as_bool().unwrap(), false);
}

#[test]
fn test_key_type_is_status_text() {
    let mut session = session(b"+list\r\n");
    let reply = session.key_type("mylist").unwrap();
    assert_eq!(reply, Reply::Bulk(Buffer::from("list")));
}

#[test]
fn test_info_decodes_into_map() {
    let info = "redis_version:1.2.6\r\nrole:master\r\n";
    let frame = format!("${}\r\n{}\r\n", info.len(), info);

    let mut session = session(frame.as_bytes());
    let reply = session.info().unwrap();
    assert_eq!(
        reply.map_get("role").unwrap(),
        Some(&Buffer::from("master"))
    );
}

// =============================================================================
// List Commands
// =============================================================================

#[test]
fn test_lrange_in_order() {
    let mut session = session(b"*2\r\n$5\r\nfirst\r\n$6\r\nsecond\r\n");
    let reply = session.lrange("l", 0, -1).unwrap();

    let items = reply.as_list().unwrap();
    assert_eq!(items[0], Buffer::from("first"));
    assert_eq!(items[1], Buffer::from("second"));
}

#[test]
fn test_blpop_appends_timeout() {
    let mut session = session(b"*2\r\n$1\r\nq\r\n$3\r\njob\r\n");
    let keys = [Buffer::from("q")];
    let reply = session.blpop(&keys, 30).unwrap();

    assert_eq!(
        reply,
        Reply::List(vec![Buffer::from("q"), Buffer::from("job")])
    );
    assert_eq!(
        written(session),
        b"*3\r\n$5\r\nBLPOP\r\n$1\r\nq\r\n$2\r\n30\r\n"
    );
}

#[test]
fn test_blpop_timeout_is_nil() {
    let mut session = session(b"*-1\r\n");
    let keys = [Buffer::from("q")];
    assert!(session.blpop(&keys, 1).unwrap().is_nil());
}

// =============================================================================
// Sorted-set Commands
// =============================================================================

#[test]
fn test_zadd_renders_score_as_text() {
    let mut session = session(b":1\r\n");
    session.zadd("board", 1.5, "player").unwrap();

    assert_eq!(
        written(session),
        b"*4\r\n$4\r\nZADD\r\n$5\r\nboard\r\n$3\r\n1.5\r\n$6\r\nplayer\r\n"
    );
}

#[test]
fn test_zrange_with_scores_decodes_zset() {
    let mut session = session(b"*4\r\n$1\r\na\r\n$1\r\n1\r\n$1\r\nb\r\n$1\r\n2\r\n");
    let reply = session.zrange_with_scores("board", 0, -1).unwrap();

    assert_eq!(
        reply,
        Reply::ZSet(vec![(Buffer::from("a"), 1.0), (Buffer::from("b"), 2.0)])
    );
    assert_eq!(
        written(session),
        b"*5\r\n$6\r\nZRANGE\r\n$5\r\nboard\r\n$1\r\n0\r\n$2\r\n-1\r\n$10\r\nWITHSCORES\r\n"
    );
}

#[test]
fn test_zscore_decodes_double() {
    let mut session = session(b"$4\r\n3.25\r\n");
    let reply = session.zscore("board", "player").unwrap();
    assert_eq!(reply.as_double().unwrap(), 3.25);
}

#[test]
fn test_zunionstore_with_weights_and_aggregate() {
    let mut session = session(b":4\r\n");
    let keys = [Buffer::from("z1"), Buffer::from("z2")];
    let reply = session
        .zunionstore_with("dest", &keys, &[2.0, 0.5], Some(Aggregate::Max))
        .unwrap();

    assert_eq!(reply.as_integer().unwrap(), 4);
    assert_eq!(
        written(session),
        b"*10\r\n$11\r\nZUNIONSTORE\r\n$4\r\ndest\r\n$1\r\n2\r\n$2\r\nz1\r\n$2\r\nz2\r\n\
          $7\r\nWEIGHTS\r\n$1\r\n2\r\n$3\r\n0.5\r\n$9\r\nAGGREGATE\r\n$3\r\nMAX\r\n"
            .to_vec()
    );
}

// =============================================================================
// Hash Commands
// =============================================================================

#[test]
fn test_hgetall_decodes_ordered_map() {
    let mut session = session(b"*4\r\n$4\r\nname\r\n$5\r\nalice\r\n$3\r\nage\r\n$2\r\n30\r\n");
    let reply = session.hgetall("user:1").unwrap();

    let entries = reply.as_map().unwrap();
    assert_eq!(entries[0], ("name".to_string(), Buffer::from("alice")));
    assert_eq!(entries[1], ("age".to_string(), Buffer::from("30")));
}

#[test]
fn test_hset_frame() {
    let mut session = session(b":1\r\n");
    session.hset("user:1", "name", "alice").unwrap();

    assert_eq!(
        written(session),
        b"*4\r\n$4\r\nHSET\r\n$6\r\nuser:1\r\n$4\r\nname\r\n$5\r\nalice\r\n"
    );
}

// =============================================================================
// SORT Options
// =============================================================================

#[test]
fn test_sort_with_options_in_canonical_order() {
    let mut session = session(b"*1\r\n$1\r\nx\r\n");
    let options = SortOptions::new()
        .by("weight_*")
        .limit(0, 10)
        .get("object_*")
        .descending()
        .alpha();
    session.sort_with("mylist", &options).unwrap();

    assert_eq!(
        written(session),
        b"*11\r\n$4\r\nSORT\r\n$6\r\nmylist\r\n$2\r\nBY\r\n$8\r\nweight_*\r\n\
          $5\r\nLIMIT\r\n$1\r\n0\r\n$2\r\n10\r\n$3\r\nGET\r\n$8\r\nobject_*\r\n$4\r\nDESC\r\n\
          $5\r\nALPHA\r\n"
            .to_vec()
    );
}

#[test]
fn test_sort_with_store_decodes_count() {
    let mut session = session(b":3\r\n");
    let options = SortOptions::new().alpha().store("sorted");
    let reply = session.sort_with("mylist", &options).unwrap();

    assert_eq!(reply.as_integer().unwrap(), 3);
}
