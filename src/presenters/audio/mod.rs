pub mod rodio_soundtrack;
