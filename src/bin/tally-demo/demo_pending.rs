use tally::{check_not_impl, check_true, Case, TestRunner};

fn ipv6_listener(tc: &mut Case<'_>) {
    check_not_impl!(tc, "IPv6 listener tests are not written yet");
}

fn ipv4_listener(tc: &mut Case<'_>) {
    let addr: std::net::Ipv4Addr = [127, 0, 0, 1].into();
    check_true!(tc, addr.is_loopback());
}

pub fn suite(runner: &mut TestRunner) {
    let suite = runner.add_suite(file!());
    runner.run(suite, ipv4_listener);
    runner.run(suite, ipv6_listener);
}
