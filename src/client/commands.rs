//! Command surface
//!
//! Every method is a thin wrapper over the dispatch engine: build a
//! [`Command`] with a fixed keyword, pick the [`Decoder`] matching the
//! reply shape the server documents for it, hand both to
//! [`Session::run`]. Under pipelining or an open transaction the reply is
//! the [`Reply::Queued`] marker; the real reply arrives from
//! [`Session::flush_pipeline`] or [`Session::exec`].
//!
//! Server-reported failures come back as [`Reply::Error`] values, so every
//! method here returns `Ok` for a well-formed error reply.

use std::io::{BufRead, Write};

use super::session::Session;
use super::sort::{Aggregate, SortOptions};
use crate::error::Result;
use crate::protocol::{Buffer, Command, Decoder, Reply};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Issue `<keyword> key...` for a multi-key command
    fn run_keys(&mut self, keyword: &str, keys: &[Buffer], decoder: Decoder) -> Result<Reply> {
        self.run(&Command::new(keyword).args(keys), decoder)
    }

    /// Issue `<keyword> destination numkeys key... [WEIGHTS ...] [AGGREGATE ...]`
    fn run_zstore(
        &mut self,
        keyword: &str,
        destination: impl Into<Buffer>,
        keys: &[Buffer],
        weights: &[f64],
        aggregate: Option<Aggregate>,
    ) -> Result<Reply> {
        let mut command = Command::new(keyword)
            .arg(destination)
            .arg(keys.len())
            .args(keys);
        if !weights.is_empty() {
            command = command.arg("WEIGHTS");
            for &weight in weights {
                command = command.arg(weight);
            }
        }
        if let Some(aggregate) = aggregate {
            command = command.arg("AGGREGATE").arg(aggregate.keyword());
        }
        self.run(&command, Decoder::Integer)
    }

    /// Issue `<keyword> key... timeout` for a blocking pop
    ///
    /// The timeout is a protocol-level parameter the server waits on, not
    /// a client-side cancellation; with a zero timeout the read blocks
    /// until an element arrives.
    fn run_blocking_pop(&mut self, keyword: &str, keys: &[Buffer], timeout: i64) -> Result<Reply> {
        self.run(&Command::new(keyword).args(keys).arg(timeout), Decoder::List)
    }

    // =========================================================================
    // Server and keyspace commands
    // =========================================================================

    /// Ping the server; replies with `PONG`
    pub fn ping(&mut self) -> Result<Reply> {
        self.run(&Command::new("PING"), Decoder::Status)
    }

    /// Authenticate the connection
    pub fn auth(&mut self, password: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("AUTH").arg(password), Decoder::Bool)
    }

    /// Select the logical database for this connection
    pub fn select(&mut self, index: i64) -> Result<Reply> {
        self.run(&Command::new("SELECT").arg(index), Decoder::Bool)
    }

    /// Server statistics, parsed into an ordered key/value map
    pub fn info(&mut self) -> Result<Reply> {
        self.run(&Command::new("INFO"), Decoder::Info)
    }

    /// Number of keys in the selected database
    pub fn dbsize(&mut self) -> Result<Reply> {
        self.run(&Command::new("DBSIZE"), Decoder::Integer)
    }

    /// Unix timestamp of the last successful save
    pub fn lastsave(&mut self) -> Result<Reply> {
        self.run(&Command::new("LASTSAVE"), Decoder::Integer)
    }

    /// Synchronous snapshot to disk
    pub fn save(&mut self) -> Result<Reply> {
        self.run(&Command::new("SAVE"), Decoder::Bool)
    }

    /// Background snapshot to disk
    pub fn bgsave(&mut self) -> Result<Reply> {
        self.run(&Command::new("BGSAVE"), Decoder::Status)
    }

    /// Background append-only-file rewrite
    pub fn bgrewriteaof(&mut self) -> Result<Reply> {
        self.run(&Command::new("BGREWRITEAOF"), Decoder::Status)
    }

    /// Remove every key in the selected database
    pub fn flushdb(&mut self) -> Result<Reply> {
        self.run(&Command::new("FLUSHDB"), Decoder::Bool)
    }

    /// Remove every key in every database
    pub fn flushall(&mut self) -> Result<Reply> {
        self.run(&Command::new("FLUSHALL"), Decoder::Bool)
    }

    /// Keys matching a glob pattern
    pub fn keys(&mut self, pattern: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("KEYS").arg(pattern), Decoder::List)
    }

    /// A random key from the selected database
    pub fn random_key(&mut self) -> Result<Reply> {
        self.run(&Command::new("RANDOMKEY"), Decoder::Bulk)
    }

    /// Rename a key, overwriting any existing destination
    pub fn rename(&mut self, src: impl Into<Buffer>, dst: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("RENAME").arg(src).arg(dst), Decoder::Bool)
    }

    /// Rename a key only if the destination does not exist
    pub fn rename_nx(&mut self, src: impl Into<Buffer>, dst: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("RENAMENX").arg(src).arg(dst), Decoder::Bool)
    }

    /// Remaining time to live of a key, in seconds
    pub fn ttl(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("TTL").arg(key), Decoder::Integer)
    }

    /// Expire a key after the given number of seconds
    pub fn expire(&mut self, key: impl Into<Buffer>, seconds: i64) -> Result<Reply> {
        self.run(&Command::new("EXPIRE").arg(key).arg(seconds), Decoder::Bool)
    }

    /// Expire a key at the given Unix timestamp
    pub fn expire_at(&mut self, key: impl Into<Buffer>, timestamp: i64) -> Result<Reply> {
        self.run(
            &Command::new("EXPIREAT").arg(key).arg(timestamp),
            Decoder::Bool,
        )
    }

    /// Whether a key exists
    pub fn exists(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("EXISTS").arg(key), Decoder::Bool)
    }

    /// Delete one key
    pub fn del(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("DEL").arg(key), Decoder::Bool)
    }

    /// Delete several keys; replies with the number removed
    pub fn del_many(&mut self, keys: &[Buffer]) -> Result<Reply> {
        self.run_keys("DEL", keys, Decoder::Integer)
    }

    /// The type of the value stored at a key (`string`, `list`, ...)
    pub fn key_type(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("TYPE").arg(key), Decoder::Status)
    }

    /// Move a key to another logical database
    pub fn move_key(&mut self, key: impl Into<Buffer>, db: i64) -> Result<Reply> {
        self.run(&Command::new("MOVE").arg(key).arg(db), Decoder::Bool)
    }

    /// Sort a list, set, or sorted set with default options
    pub fn sort(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("SORT").arg(key), Decoder::List)
    }

    /// Sort with explicit options; STORE flips the reply to a count
    pub fn sort_with(&mut self, key: impl Into<Buffer>, options: &SortOptions) -> Result<Reply> {
        let command = options.apply(Command::new("SORT").arg(key));
        let decoder = if options.stores() {
            Decoder::Integer
        } else {
            Decoder::List
        };
        self.run(&command, decoder)
    }

    /// Read a configuration parameter (glob patterns allowed)
    pub fn config_get(&mut self, parameter: impl Into<Buffer>) -> Result<Reply> {
        self.run(
            &Command::new("CONFIG").arg("GET").arg(parameter),
            Decoder::Map,
        )
    }

    /// Set a configuration parameter
    pub fn config_set(
        &mut self,
        parameter: impl Into<Buffer>,
        value: impl Into<Buffer>,
    ) -> Result<Reply> {
        self.run(
            &Command::new("CONFIG").arg("SET").arg(parameter).arg(value),
            Decoder::Bool,
        )
    }

    // =========================================================================
    // String commands
    // =========================================================================

    /// Value of a key, or nil
    pub fn get(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("GET").arg(key), Decoder::Bulk)
    }

    /// Set a key to a value
    pub fn set(&mut self, key: impl Into<Buffer>, value: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("SET").arg(key).arg(value), Decoder::Bool)
    }

    /// Set a key and reply with its previous value
    pub fn getset(&mut self, key: impl Into<Buffer>, value: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("GETSET").arg(key).arg(value), Decoder::Bulk)
    }

    /// Set a key only if it does not exist
    pub fn set_nx(&mut self, key: impl Into<Buffer>, value: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("SETNX").arg(key).arg(value), Decoder::Bool)
    }

    /// Increment the integer value of a key by one
    pub fn incr(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("INCR").arg(key), Decoder::Integer)
    }

    /// Increment the integer value of a key
    pub fn incr_by(&mut self, key: impl Into<Buffer>, delta: i64) -> Result<Reply> {
        self.run(&Command::new("INCRBY").arg(key).arg(delta), Decoder::Integer)
    }

    /// Decrement the integer value of a key by one
    pub fn decr(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("DECR").arg(key), Decoder::Integer)
    }

    /// Decrement the integer value of a key
    pub fn decr_by(&mut self, key: impl Into<Buffer>, delta: i64) -> Result<Reply> {
        self.run(&Command::new("DECRBY").arg(key).arg(delta), Decoder::Integer)
    }

    /// Append bytes to a string value; replies with the new length
    pub fn append(&mut self, key: impl Into<Buffer>, value: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("APPEND").arg(key).arg(value), Decoder::Integer)
    }

    /// Substring of a string value (inclusive indices, negatives from the end)
    pub fn substr(&mut self, key: impl Into<Buffer>, start: i64, end: i64) -> Result<Reply> {
        self.run(
            &Command::new("SUBSTR").arg(key).arg(start).arg(end),
            Decoder::Bulk,
        )
    }

    /// Values of several keys; missing keys yield empty entries
    pub fn mget(&mut self, keys: &[Buffer]) -> Result<Reply> {
        self.run_keys("MGET", keys, Decoder::List)
    }

    /// Set several keys atomically
    pub fn mset(&mut self, pairs: &[(Buffer, Buffer)]) -> Result<Reply> {
        let mut command = Command::new("MSET");
        for (key, value) in pairs {
            command = command.arg(key).arg(value);
        }
        self.run(&command, Decoder::Bool)
    }

    /// Set several keys atomically, only if none of them exist
    pub fn mset_nx(&mut self, pairs: &[(Buffer, Buffer)]) -> Result<Reply> {
        let mut command = Command::new("MSETNX");
        for (key, value) in pairs {
            command = command.arg(key).arg(value);
        }
        self.run(&command, Decoder::Bool)
    }

    // =========================================================================
    // List commands
    // =========================================================================

    /// Prepend a value to a list; replies with the new length
    pub fn lpush(&mut self, key: impl Into<Buffer>, value: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("LPUSH").arg(key).arg(value), Decoder::Integer)
    }

    /// Append a value to a list; replies with the new length
    pub fn rpush(&mut self, key: impl Into<Buffer>, value: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("RPUSH").arg(key).arg(value), Decoder::Integer)
    }

    /// Length of a list
    pub fn llen(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("LLEN").arg(key), Decoder::Integer)
    }

    /// Pop from the head of a list
    pub fn lpop(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("LPOP").arg(key), Decoder::Bulk)
    }

    /// Pop from the tail of a list
    pub fn rpop(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("RPOP").arg(key), Decoder::Bulk)
    }

    /// Atomically pop from the tail of one list and push onto another
    pub fn rpoplpush(&mut self, src: impl Into<Buffer>, dst: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("RPOPLPUSH").arg(src).arg(dst), Decoder::Bulk)
    }

    /// Blocking head pop across several lists
    ///
    /// Replies with a `[key, value]` pair, or nil when the server-side
    /// wait times out.
    pub fn blpop(&mut self, keys: &[Buffer], timeout: i64) -> Result<Reply> {
        self.run_blocking_pop("BLPOP", keys, timeout)
    }

    /// Blocking tail pop across several lists
    pub fn brpop(&mut self, keys: &[Buffer], timeout: i64) -> Result<Reply> {
        self.run_blocking_pop("BRPOP", keys, timeout)
    }

    /// Trim a list to the given inclusive range
    pub fn ltrim(&mut self, key: impl Into<Buffer>, start: i64, end: i64) -> Result<Reply> {
        self.run(
            &Command::new("LTRIM").arg(key).arg(start).arg(end),
            Decoder::Bool,
        )
    }

    /// Element at a list index
    pub fn lindex(&mut self, key: impl Into<Buffer>, index: i64) -> Result<Reply> {
        self.run(&Command::new("LINDEX").arg(key).arg(index), Decoder::Bulk)
    }

    /// Remove occurrences of a value from a list; replies with the count
    pub fn lrem(
        &mut self,
        key: impl Into<Buffer>,
        count: i64,
        value: impl Into<Buffer>,
    ) -> Result<Reply> {
        self.run(
            &Command::new("LREM").arg(key).arg(count).arg(value),
            Decoder::Integer,
        )
    }

    /// Overwrite the element at a list index
    pub fn lset(
        &mut self,
        key: impl Into<Buffer>,
        index: i64,
        value: impl Into<Buffer>,
    ) -> Result<Reply> {
        self.run(
            &Command::new("LSET").arg(key).arg(index).arg(value),
            Decoder::Bool,
        )
    }

    /// Elements of a list within the given inclusive range
    pub fn lrange(&mut self, key: impl Into<Buffer>, start: i64, end: i64) -> Result<Reply> {
        self.run(
            &Command::new("LRANGE").arg(key).arg(start).arg(end),
            Decoder::List,
        )
    }

    // =========================================================================
    // Set commands
    // =========================================================================

    /// Add a member to a set
    pub fn sadd(&mut self, key: impl Into<Buffer>, member: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("SADD").arg(key).arg(member), Decoder::Bool)
    }

    /// Remove a member from a set
    pub fn srem(&mut self, key: impl Into<Buffer>, member: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("SREM").arg(key).arg(member), Decoder::Bool)
    }

    /// Remove and reply with a random member of a set
    pub fn spop(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("SPOP").arg(key), Decoder::Bulk)
    }

    /// Cardinality of a set
    pub fn scard(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("SCARD").arg(key), Decoder::Integer)
    }

    /// Whether a value is a member of a set
    pub fn sismember(
        &mut self,
        key: impl Into<Buffer>,
        member: impl Into<Buffer>,
    ) -> Result<Reply> {
        self.run(
            &Command::new("SISMEMBER").arg(key).arg(member),
            Decoder::Bool,
        )
    }

    /// A random member of a set, without removing it
    pub fn srandmember(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("SRANDMEMBER").arg(key), Decoder::Bulk)
    }

    /// Move a member between sets
    pub fn smove(
        &mut self,
        src: impl Into<Buffer>,
        dst: impl Into<Buffer>,
        member: impl Into<Buffer>,
    ) -> Result<Reply> {
        self.run(
            &Command::new("SMOVE").arg(src).arg(dst).arg(member),
            Decoder::Bool,
        )
    }

    /// Intersection of several sets
    pub fn sinter(&mut self, keys: &[Buffer]) -> Result<Reply> {
        self.run_keys("SINTER", keys, Decoder::List)
    }

    /// Union of several sets
    pub fn sunion(&mut self, keys: &[Buffer]) -> Result<Reply> {
        self.run_keys("SUNION", keys, Decoder::List)
    }

    /// Difference of the first set against the rest
    pub fn sdiff(&mut self, keys: &[Buffer]) -> Result<Reply> {
        self.run_keys("SDIFF", keys, Decoder::List)
    }

    /// Store the intersection of several sets; replies with its cardinality
    pub fn sinterstore(&mut self, destination: impl Into<Buffer>, keys: &[Buffer]) -> Result<Reply> {
        self.run(
            &Command::new("SINTERSTORE").arg(destination).args(keys),
            Decoder::Integer,
        )
    }

    /// Store the union of several sets; replies with its cardinality
    pub fn sunionstore(&mut self, destination: impl Into<Buffer>, keys: &[Buffer]) -> Result<Reply> {
        self.run(
            &Command::new("SUNIONSTORE").arg(destination).args(keys),
            Decoder::Integer,
        )
    }

    /// Store the difference of several sets; replies with its cardinality
    pub fn sdiffstore(&mut self, destination: impl Into<Buffer>, keys: &[Buffer]) -> Result<Reply> {
        self.run(
            &Command::new("SDIFFSTORE").arg(destination).args(keys),
            Decoder::Integer,
        )
    }

    // =========================================================================
    // Sorted-set commands
    // =========================================================================

    /// Add a member with a score to a sorted set
    pub fn zadd(
        &mut self,
        key: impl Into<Buffer>,
        score: f64,
        member: impl Into<Buffer>,
    ) -> Result<Reply> {
        self.run(
            &Command::new("ZADD").arg(key).arg(score).arg(member),
            Decoder::Bool,
        )
    }

    /// Remove a member from a sorted set
    pub fn zrem(&mut self, key: impl Into<Buffer>, member: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("ZREM").arg(key).arg(member), Decoder::Bool)
    }

    /// Add to a member's score; replies with the new score
    pub fn zincrby(
        &mut self,
        key: impl Into<Buffer>,
        delta: f64,
        member: impl Into<Buffer>,
    ) -> Result<Reply> {
        self.run(
            &Command::new("ZINCRBY").arg(key).arg(delta).arg(member),
            Decoder::Double,
        )
    }

    /// Score of a member, or nil
    pub fn zscore(&mut self, key: impl Into<Buffer>, member: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("ZSCORE").arg(key).arg(member), Decoder::Double)
    }

    /// Ascending rank of a member, or nil
    pub fn zrank(&mut self, key: impl Into<Buffer>, member: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("ZRANK").arg(key).arg(member), Decoder::Integer)
    }

    /// Descending rank of a member, or nil
    pub fn zrevrank(&mut self, key: impl Into<Buffer>, member: impl Into<Buffer>) -> Result<Reply> {
        self.run(
            &Command::new("ZREVRANK").arg(key).arg(member),
            Decoder::Integer,
        )
    }

    /// Members in a rank range, ascending
    pub fn zrange(&mut self, key: impl Into<Buffer>, start: i64, stop: i64) -> Result<Reply> {
        self.run(
            &Command::new("ZRANGE").arg(key).arg(start).arg(stop),
            Decoder::List,
        )
    }

    /// Members and scores in a rank range, ascending, in server order
    pub fn zrange_with_scores(
        &mut self,
        key: impl Into<Buffer>,
        start: i64,
        stop: i64,
    ) -> Result<Reply> {
        self.run(
            &Command::new("ZRANGE")
                .arg(key)
                .arg(start)
                .arg(stop)
                .arg("WITHSCORES"),
            Decoder::ZSet,
        )
    }

    /// Members in a rank range, descending
    pub fn zrevrange(&mut self, key: impl Into<Buffer>, start: i64, stop: i64) -> Result<Reply> {
        self.run(
            &Command::new("ZREVRANGE").arg(key).arg(start).arg(stop),
            Decoder::List,
        )
    }

    /// Members and scores in a rank range, descending, in server order
    pub fn zrevrange_with_scores(
        &mut self,
        key: impl Into<Buffer>,
        start: i64,
        stop: i64,
    ) -> Result<Reply> {
        self.run(
            &Command::new("ZREVRANGE")
                .arg(key)
                .arg(start)
                .arg(stop)
                .arg("WITHSCORES"),
            Decoder::ZSet,
        )
    }

    /// Cardinality of a sorted set
    pub fn zcard(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("ZCARD").arg(key), Decoder::Integer)
    }

    /// Number of members with scores in the given inclusive range
    pub fn zcount(&mut self, key: impl Into<Buffer>, min: f64, max: f64) -> Result<Reply> {
        self.run(
            &Command::new("ZCOUNT").arg(key).arg(min).arg(max),
            Decoder::Integer,
        )
    }

    /// Remove members by rank range; replies with the count removed
    pub fn zremrangebyrank(
        &mut self,
        key: impl Into<Buffer>,
        start: i64,
        stop: i64,
    ) -> Result<Reply> {
        self.run(
            &Command::new("ZREMRANGEBYRANK").arg(key).arg(start).arg(stop),
            Decoder::Integer,
        )
    }

    /// Remove members by score range; replies with the count removed
    pub fn zremrangebyscore(
        &mut self,
        key: impl Into<Buffer>,
        min: f64,
        max: f64,
    ) -> Result<Reply> {
        self.run(
            &Command::new("ZREMRANGEBYSCORE").arg(key).arg(min).arg(max),
            Decoder::Integer,
        )
    }

    /// Members with scores in the given inclusive range
    pub fn zrangebyscore(&mut self, key: impl Into<Buffer>, min: f64, max: f64) -> Result<Reply> {
        self.run(
            &Command::new("ZRANGEBYSCORE").arg(key).arg(min).arg(max),
            Decoder::List,
        )
    }

    /// Members and scores in the given score range, in server order
    pub fn zrangebyscore_with_scores(
        &mut self,
        key: impl Into<Buffer>,
        min: f64,
        max: f64,
    ) -> Result<Reply> {
        self.run(
            &Command::new("ZRANGEBYSCORE")
                .arg(key)
                .arg(min)
                .arg(max)
                .arg("WITHSCORES"),
            Decoder::ZSet,
        )
    }

    /// A window of the members with scores in the given range
    pub fn zrangebyscore_limit(
        &mut self,
        key: impl Into<Buffer>,
        min: f64,
        max: f64,
        offset: i64,
        count: i64,
    ) -> Result<Reply> {
        self.run(
            &Command::new("ZRANGEBYSCORE")
                .arg(key)
                .arg(min)
                .arg(max)
                .arg("LIMIT")
                .arg(offset)
                .arg(count),
            Decoder::List,
        )
    }

    /// Store the union of several sorted sets; replies with its cardinality
    pub fn zunionstore(&mut self, destination: impl Into<Buffer>, keys: &[Buffer]) -> Result<Reply> {
        self.run_zstore("ZUNIONSTORE", destination, keys, &[], None)
    }

    /// Union with per-key weights and an aggregation function
    pub fn zunionstore_with(
        &mut self,
        destination: impl Into<Buffer>,
        keys: &[Buffer],
        weights: &[f64],
        aggregate: Option<Aggregate>,
    ) -> Result<Reply> {
        self.run_zstore("ZUNIONSTORE", destination, keys, weights, aggregate)
    }

    /// Store the intersection of several sorted sets; replies with its cardinality
    pub fn zinterstore(&mut self, destination: impl Into<Buffer>, keys: &[Buffer]) -> Result<Reply> {
        self.run_zstore("ZINTERSTORE", destination, keys, &[], None)
    }

    /// Intersection with per-key weights and an aggregation function
    pub fn zinterstore_with(
        &mut self,
        destination: impl Into<Buffer>,
        keys: &[Buffer],
        weights: &[f64],
        aggregate: Option<Aggregate>,
    ) -> Result<Reply> {
        self.run_zstore("ZINTERSTORE", destination, keys, weights, aggregate)
    }

    // =========================================================================
    // Hash commands
    // =========================================================================

    /// Set a hash field
    pub fn hset(
        &mut self,
        key: impl Into<Buffer>,
        field: impl Into<Buffer>,
        value: impl Into<Buffer>,
    ) -> Result<Reply> {
        self.run(
            &Command::new("HSET").arg(key).arg(field).arg(value),
            Decoder::Bool,
        )
    }

    /// Value of a hash field, or nil
    pub fn hget(&mut self, key: impl Into<Buffer>, field: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("HGET").arg(key).arg(field), Decoder::Bulk)
    }

    /// Delete a hash field
    pub fn hdel(&mut self, key: impl Into<Buffer>, field: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("HDEL").arg(key).arg(field), Decoder::Bool)
    }

    /// Whether a hash field exists
    pub fn hexists(&mut self, key: impl Into<Buffer>, field: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("HEXISTS").arg(key).arg(field), Decoder::Bool)
    }

    /// Number of fields in a hash
    pub fn hlen(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("HLEN").arg(key), Decoder::Integer)
    }

    /// Field names of a hash
    pub fn hkeys(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("HKEYS").arg(key), Decoder::List)
    }

    /// Values of a hash
    pub fn hvals(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("HVALS").arg(key), Decoder::List)
    }

    /// All fields and values of a hash, as an ordered map
    pub fn hgetall(&mut self, key: impl Into<Buffer>) -> Result<Reply> {
        self.run(&Command::new("HGETALL").arg(key), Decoder::Map)
    }

    /// Increment the integer value of a hash field
    pub fn hincr_by(
        &mut self,
        key: impl Into<Buffer>,
        field: impl Into<Buffer>,
        delta: i64,
    ) -> Result<Reply> {
        self.run(
            &Command::new("HINCRBY").arg(key).arg(field).arg(delta),
            Decoder::Integer,
        )
    }
}
