mod loader_tests;
mod parse_tests;

pub const VALID: &str = "2024-05-01 14:00:00 - network=HomeWifi  signal=72%  packet-loss=3%  rtt-min=11.2 ms  rtt-med=14.9 ms  rtt-max=30.1 ms  rtt-dev=3.4 ms";

pub const UNMEASURED: &str = "2024-05-01 14:01:00 - network=None  signal=0%  packet-loss=100%  rtt-min=null ms  rtt-med=null ms  rtt-max=null ms  rtt-dev=null ms";
