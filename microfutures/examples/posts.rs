//! Looks up a user, then one of their posts, and prints the post title.
//!
//! Both lookups complete on a worker thread. Run with `RUST_LOG=trace` to see
//! the chains being triggered.

use std::{error, fmt, sync::mpsc, thread, time::Duration};

use log::{error, info};
use microfutures::prelude::*;

#[derive(Debug, Clone)]
struct User {
    name: String,
}

#[derive(Debug)]
struct Post {
    author: User,
    title: String,
}

#[derive(Debug)]
enum SomeError {
    SomeError,
}

impl fmt::Display for SomeError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "some error")
    }
}

impl error::Error for SomeError {}

fn get_user() -> Future<User, SomeError> {
    Future::from_operation(|completion| {
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            completion.succeed(User {
                name: "fmo91".to_owned(),
            });
        });
    })
}

fn get_post_for_user(user: User) -> Future<Post, SomeError> {
    Future::from_operation(move |completion| {
        thread::spawn(move || {
            completion.succeed(Post {
                author: user,
                title: "Microfutures docs".to_owned(),
            });
        });
    })
}

fn call_that_fails() -> Future<(), SomeError> {
    Future::from_operation(|completion| completion.fail(SomeError::SomeError))
}

fn get_post_title_description(post: Post) -> String {
    info!("post by {}", post.author.name);
    format!("Title => {}", post.title)
}

fn main() {
    env_logger::init();

    let (tx, rx) = mpsc::channel();

    get_user()
        .flat_map(get_post_for_user)
        .map(get_post_title_description)
        .subscribe(
            move |description| {
                let _ = tx.send(description);
            },
            |err| error!("lookup failed: {}", err),
        );

    match rx.recv() {
        Ok(description) => println!("{}", description),
        Err(_) => error!("lookup never completed"),
    }

    call_that_fails().subscribe(
        |_| println!("It works fine!"),
        |err| match err {
            SomeError::SomeError => println!("Some error"),
        },
    );
}
