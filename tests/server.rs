use bytes::Bytes;
use tokio::net::TcpStream;
use tokio::time::{sleep, Duration};

use sedis::connection::Connection;
use sedis::frame::Frame;
use sedis::server;

/// Spawns a server on the given port and connects a client to it. Each test
/// uses its own port so the servers never interfere.
async fn connect(port: u16) -> Connection {
    tokio::spawn(async move { server::run("127.0.0.1", port).await });

    for _ in 0..100 {
        if let Ok(stream) = TcpStream::connect(("127.0.0.1", port)).await {
            return Connection::new(stream);
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("server on port {} did not come up", port);
}

fn bulk(s: &str) -> Frame {
    Frame::Bulk(Bytes::copy_from_slice(s.as_bytes()))
}

fn request(parts: &[&str]) -> Frame {
    Frame::Array(parts.iter().map(|part| bulk(part)).collect())
}

async fn send(conn: &mut Connection, parts: &[&str]) -> Frame {
    conn.write_frame(request(parts)).await.unwrap();
    conn.read_frame().await.unwrap().expect("reply expected")
}

/// Pulls the bulk payloads out of an array reply and sorts them, for
/// commands whose reply order is unspecified.
fn sorted_members(frame: Frame) -> Vec<Bytes> {
    let mut members: Vec<Bytes> = match frame {
        Frame::Array(frames) => frames
            .into_iter()
            .map(|frame| match frame {
                Frame::Bulk(bytes) => bytes,
                other => panic!("expected bulk, got {:?}", other),
            })
            .collect(),
        other => panic!("expected array, got {:?}", other),
    };
    members.sort();
    members
}

#[tokio::test]
async fn ping() {
    let mut conn = connect(7301).await;

    assert_eq!(
        send(&mut conn, &["PING"]).await,
        Frame::Simple("PONG".to_string())
    );
    assert_eq!(
        send(&mut conn, &["PING", "hello"]).await,
        Frame::Simple("hello".to_string())
    );
}

#[tokio::test]
async fn set_get_del_round_trip() {
    let mut conn = connect(7302).await;

    assert_eq!(
        send(&mut conn, &["SET", "foo", "bar"]).await,
        Frame::Simple("OK".to_string())
    );
    assert_eq!(send(&mut conn, &["GET", "foo"]).await, bulk("bar"));
    assert_eq!(send(&mut conn, &["DEL", "foo"]).await, Frame::Integer(1));
    assert_eq!(send(&mut conn, &["GET", "foo"]).await, Frame::Null);
}

#[tokio::test]
async fn counter_arithmetic() {
    let mut conn = connect(7303).await;

    assert_eq!(send(&mut conn, &["INCR", "ctr"]).await, Frame::Integer(1));
    assert_eq!(send(&mut conn, &["INCR", "ctr"]).await, Frame::Integer(2));
    assert_eq!(send(&mut conn, &["DECR", "ctr"]).await, Frame::Integer(1));

    send(&mut conn, &["SET", "ctr", "xyz"]).await;
    assert_eq!(
        send(&mut conn, &["INCR", "ctr"]).await,
        Frame::Error("ERR value is not an integer or out of range".to_string())
    );
}

#[tokio::test]
async fn list_lifecycle() {
    let mut conn = connect(7304).await;

    assert_eq!(
        send(&mut conn, &["RPUSH", "q", "a", "b", "c"]).await,
        Frame::Integer(3)
    );
    assert_eq!(
        send(&mut conn, &["LRANGE", "q", "0", "-1"]).await,
        Frame::Array(vec![bulk("a"), bulk("b"), bulk("c")])
    );
    assert_eq!(send(&mut conn, &["LPOP", "q"]).await, bulk("a"));
    assert_eq!(send(&mut conn, &["LLEN", "q"]).await, Frame::Integer(2));
    assert_eq!(
        send(&mut conn, &["LTRIM", "q", "1", "0"]).await,
        Frame::Simple("OK".to_string())
    );
    assert_eq!(send(&mut conn, &["EXISTS", "q"]).await, Frame::Integer(0));
}

#[tokio::test]
async fn set_algebra() {
    let mut conn = connect(7305).await;

    assert_eq!(
        send(&mut conn, &["SADD", "s", "x", "y", "z"]).await,
        Frame::Integer(3)
    );
    assert_eq!(
        send(&mut conn, &["SADD", "s", "x"]).await,
        Frame::Integer(0)
    );
    assert_eq!(send(&mut conn, &["SCARD", "s"]).await, Frame::Integer(3));

    send(&mut conn, &["SADD", "t", "y", "w"]).await;

    let inter = send(&mut conn, &["SINTER", "s", "t"]).await;
    assert_eq!(sorted_members(inter), vec![Bytes::from("y")]);

    let diff = send(&mut conn, &["SDIFF", "s", "t"]).await;
    assert_eq!(
        sorted_members(diff),
        vec![Bytes::from("x"), Bytes::from("z")]
    );
}

#[tokio::test]
async fn sorted_set_lifecycle() {
    let mut conn = connect(7306).await;

    assert_eq!(
        send(&mut conn, &["ZADD", "z", "1", "a", "2", "b", "3", "c"]).await,
        Frame::Integer(3)
    );
    assert_eq!(
        send(&mut conn, &["ZRANGE", "z", "0", "-1", "WITHSCORES"]).await,
        Frame::Array(vec![
            bulk("a"),
            bulk("1"),
            bulk("b"),
            bulk("2"),
            bulk("c"),
            bulk("3"),
        ])
    );
    assert_eq!(send(&mut conn, &["ZINCRBY", "z", "10", "a"]).await, bulk("11"));
    assert_eq!(
        send(&mut conn, &["ZRANGE", "z", "0", "-1"]).await,
        Frame::Array(vec![bulk("b"), bulk("c"), bulk("a")])
    );
    assert_eq!(
        send(&mut conn, &["ZREVRANK", "z", "a"]).await,
        Frame::Integer(0)
    );
}

#[tokio::test]
async fn hash_lifecycle() {
    let mut conn = connect(7307).await;

    assert_eq!(
        send(&mut conn, &["HSET", "h", "f", "1"]).await,
        Frame::Integer(1)
    );
    assert_eq!(
        send(&mut conn, &["HSET", "h", "f", "2"]).await,
        Frame::Integer(0)
    );
    assert_eq!(send(&mut conn, &["HGET", "h", "f"]).await, bulk("2"));
    assert_eq!(send(&mut conn, &["HLEN", "h"]).await, Frame::Integer(1));
    assert_eq!(
        send(&mut conn, &["HDEL", "h", "f"]).await,
        Frame::Integer(1)
    );
    assert_eq!(send(&mut conn, &["EXISTS", "h"]).await, Frame::Integer(0));
    assert_eq!(send(&mut conn, &["HGET", "h", "f"]).await, Frame::Null);
}

#[tokio::test]
async fn wrong_type_reporting() {
    let mut conn = connect(7308).await;

    send(&mut conn, &["RPUSH", "q", "a"]).await;

    assert_eq!(
        send(&mut conn, &["SADD", "q", "x"]).await,
        Frame::Error(
            "WRONGTYPE Operation against a key holding the wrong kind of value".to_string()
        )
    );
    // GET on a non-string quietly reads as absent.
    assert_eq!(send(&mut conn, &["GET", "q"]).await, Frame::Null);
}

#[tokio::test]
async fn parse_errors_keep_the_connection_open() {
    let mut conn = connect(7309).await;

    assert_eq!(
        send(&mut conn, &["NOSUCH", "x"]).await,
        Frame::Error("ERR unknown command 'NOSUCH'".to_string())
    );
    assert_eq!(
        send(&mut conn, &["GET"]).await,
        Frame::Error("ERR wrong number of arguments for 'get' command".to_string())
    );

    // The same connection still serves well-formed requests.
    assert_eq!(
        send(&mut conn, &["PING"]).await,
        Frame::Simple("PONG".to_string())
    );
}

#[tokio::test]
async fn spop_count_zero_pops_everything() {
    let mut conn = connect(7310).await;

    send(&mut conn, &["SADD", "s", "a", "b", "c"]).await;

    let popped = send(&mut conn, &["SPOP", "s", "0"]).await;
    assert_eq!(
        sorted_members(popped),
        vec![Bytes::from("a"), Bytes::from("b"), Bytes::from("c")]
    );
    assert_eq!(send(&mut conn, &["EXISTS", "s"]).await, Frame::Integer(0));
}

#[tokio::test]
async fn rank_identity_holds() {
    let mut conn = connect(7311).await;

    send(&mut conn, &["ZADD", "z", "1", "a", "2", "b", "2", "c", "5", "d"]).await;

    for member in ["a", "b", "c", "d"] {
        let rank = match send(&mut conn, &["ZRANK", "z", member]).await {
            Frame::Integer(rank) => rank,
            other => panic!("expected integer, got {:?}", other),
        };
        let rev = match send(&mut conn, &["ZREVRANK", "z", member]).await {
            Frame::Integer(rank) => rank,
            other => panic!("expected integer, got {:?}", other),
        };
        assert_eq!(rank + rev + 1, 4);
    }
}

#[tokio::test]
async fn commands_pipeline_on_one_connection() {
    let mut conn = connect(7312).await;

    // Several requests written before any reply is read; replies must come
    // back in order.
    for i in 0..5 {
        let value = i.to_string();
        conn.write_frame(request(&["RPUSH", "q", &value]))
            .await
            .unwrap();
    }
    for i in 0..5 {
        assert_eq!(
            conn.read_frame().await.unwrap(),
            Some(Frame::Integer(i + 1))
        );
    }
}
