mod dispatch;
mod rendering;
mod roundtrip;
