use feed_assembly::feed::decode::{decode_author, decode_comments, decode_posts};
use feed_assembly::feed::FetchError;
use feed_assembly::models::*;
use speculate2::speculate;

speculate! {
    describe "decode_posts" {
        it "decodes camelCase fields" {
            let body = br#"[{
                "id": 1,
                "authorId": 10,
                "content": "Hello",
                "published": 1642410000,
                "likedByMe": true,
                "likes": 4
            }]"#;

            let posts = decode_posts(body).expect("decode failed");

            assert_eq!(posts.len(), 1);
            assert_eq!(posts[0].author_id, 10);
            assert!(posts[0].liked_by_me);
            assert_eq!(posts[0].likes, 4);
            assert!(posts[0].attachment.is_none());
        }

        it "defaults likes and likedByMe when absent" {
            let body = br#"[{"id": 1, "authorId": 10, "content": "", "published": 0}]"#;

            let posts = decode_posts(body).expect("decode failed");

            assert_eq!(posts[0].likes, 0);
            assert!(!posts[0].liked_by_me);
        }

        it "decodes an image attachment" {
            let body = br#"[{
                "id": 2, "authorId": 20, "content": "pic", "published": 0,
                "attachment": {"url": "a.jpg", "description": "A", "type": "IMAGE"}
            }]"#;

            let posts = decode_posts(body).expect("decode failed");

            let attachment = posts[0].attachment.as_ref().expect("attachment missing");
            assert_eq!(attachment.kind, AttachmentType::Image);
            assert_eq!(attachment.url, "a.jpg");
        }

        it "rejects an unknown attachment type" {
            let body = br#"[{
                "id": 2, "authorId": 20, "content": "pic", "published": 0,
                "attachment": {"url": "a.mp4", "description": "A", "type": "VIDEO"}
            }]"#;

            assert!(matches!(decode_posts(body), Err(FetchError::Decode { .. })));
        }

        it "ignores unknown fields" {
            let body = br#"[{"id": 1, "authorId": 10, "content": "", "published": 0, "pinned": true}]"#;

            assert!(decode_posts(body).is_ok());
        }

        it "accepts a negative like count" {
            let body = br#"[{"id": 1, "authorId": 10, "content": "", "published": 0, "likes": -1}]"#;

            let posts = decode_posts(body).expect("decode failed");

            assert_eq!(posts[0].likes, -1);
        }

        it "accepts an empty array" {
            assert!(decode_posts(b"[]").expect("decode failed").is_empty());
        }

        it "treats a blank body as empty response" {
            let err = decode_posts(b"  \n").expect_err("blank body accepted");

            assert!(matches!(err, FetchError::EmptyResponse { .. }));
            assert_eq!(err.endpoint(), Some("posts"));
        }
    }

    describe "decode_author" {
        it "decodes an author" {
            let author = decode_author(10, br#"{"id": 10, "name": "Ann", "avatar": "ann.jpg"}"#)
                .expect("decode failed");

            assert_eq!(author, Author {
                id: 10,
                name: "Ann".to_string(),
                avatar: "ann.jpg".to_string(),
            });
        }

        it "rejects a list where an author is expected" {
            let err = decode_author(10, b"[]").expect_err("list accepted");

            assert!(matches!(err, FetchError::Decode { .. }));
            assert_eq!(err.endpoint(), Some("authors/10"));
        }

        it "rejects an empty body" {
            assert!(matches!(decode_author(10, b""), Err(FetchError::EmptyResponse { .. })));
        }
    }

    describe "decode_comments" {
        it "keeps server order" {
            let body = br#"[
                {"id": 9, "postId": 1, "authorId": 3, "content": "later", "published": 20},
                {"id": 4, "postId": 1, "authorId": 3, "content": "earlier", "published": 10}
            ]"#;

            let comments = decode_comments(1, body).expect("decode failed");

            let ids: Vec<i64> = comments.iter().map(|c| c.id).collect();
            assert_eq!(ids, vec![9, 4]);
            assert_eq!(comments[0].post_id, 1);
        }

        it "reports the comments endpoint on failure" {
            let err = decode_comments(3, b"{}").expect_err("object accepted");

            assert_eq!(err.endpoint(), Some("posts/3/comments"));
        }
    }

    describe "published_at" {
        it "converts unix seconds to UTC" {
            let post = Post {
                id: 1,
                author_id: 1,
                content: String::new(),
                published: 1_642_410_000,
                liked_by_me: false,
                likes: 0,
                attachment: None,
            };

            let at = post.published_at().expect("timestamp out of range");
            assert_eq!(at.to_rfc3339(), "2022-01-17T09:00:00+00:00");
        }
    }
}
