//! Source listings shown in the code pane.
//!
//! Generators highlight lines of these listings by 0-based index, so any edit
//! here must keep the `line` constants in the matching generator in sync.
//! `registry::tests::code_lines_stay_inside_listings` guards the bounds.

pub const BUBBLE_SORT: &str = "fn bubble_sort(arr: &mut [i64]) {
    let n = arr.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            // Compare adjacent elements
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}";

pub const INSERTION_SORT: &str = "fn insertion_sort(arr: &mut [i64]) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        // Shift larger elements one slot right
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}";

pub const QUICK_SORT: &str = "fn quick_sort(arr: &mut [i64], low: isize, high: isize) {
    if low < high {
        let pi = partition(arr, low, high);
        quick_sort(arr, low, pi - 1);
        quick_sort(arr, pi + 1, high);
    }
}

fn partition(arr: &mut [i64], low: isize, high: isize) -> isize {
    let pivot = arr[high as usize];
    let mut i = low - 1;
    for j in low..high {
        if arr[j as usize] < pivot {
            i += 1;
            arr.swap(i as usize, j as usize);
        }
    }
    arr.swap((i + 1) as usize, high as usize);
    i + 1
}";

pub const MERGE_SORT: &str = "fn merge_sort(arr: &mut [i64], left: usize, right: usize) {
    if left < right {
        let mid = (left + right) / 2;
        merge_sort(arr, left, mid);
        merge_sort(arr, mid + 1, right);
        merge(arr, left, mid, right);
    }
}

fn merge(arr: &mut [i64], left: usize, mid: usize, right: usize) {
    let l = arr[left..=mid].to_vec();
    let r = arr[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);
    while i < l.len() && j < r.len() {
        if l[i] <= r[j] {
            arr[k] = l[i];
            i += 1;
        } else {
            arr[k] = r[j];
            j += 1;
        }
        k += 1;
    }
    while i < l.len() {
        arr[k] = l[i];
        i += 1;
        k += 1;
    }
    while j < r.len() {
        arr[k] = r[j];
        j += 1;
        k += 1;
    }
}";

pub const LINEAR_SEARCH: &str = "fn linear_search(arr: &[i64], target: i64) -> Option<usize> {
    for (i, &value) in arr.iter().enumerate() {
        // Check each element in turn
        if value == target {
            return Some(i);
        }
    }
    None
}";

pub const BINARY_SEARCH: &str = "fn binary_search(arr: &[i64], target: i64) -> Option<usize> {
    let (mut left, mut right) = (0_isize, arr.len() as isize - 1);
    while left <= right {
        let mid = left + (right - left) / 2;
        let value = arr[mid as usize];
        if value == target {
            return Some(mid as usize);
        } else if value < target {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }
    None
}";

pub const JUMP_SEARCH: &str = "fn jump_search(arr: &[i64], target: i64) -> Option<usize> {
    let n = arr.len();
    let block = (n as f64).sqrt() as usize;
    let mut prev = 0;
    let mut next = block;
    // Jump ahead while the block end is still <= target
    while next < n && arr[next] <= target {
        prev = next;
        next += block;
    }
    // Linear scan inside the identified block
    for i in prev..next.min(n) {
        if arr[i] == target {
            return Some(i);
        }
    }
    None
}";

pub const INTERPOLATION_SEARCH: &str = "fn interpolation_search(arr: &[i64], target: i64) -> Option<usize> {
    let (mut low, mut high) = (0_isize, arr.len() as isize - 1);
    while low <= high && target >= arr[low as usize] && target <= arr[high as usize] {
        let (lo, hi) = (arr[low as usize], arr[high as usize]);
        let pos = if hi == lo {
            low
        } else {
            low + ((target - lo) * (high - low) as i64 / (hi - lo)) as isize
        };
        let value = arr[pos as usize];
        if value == target {
            return Some(pos as usize);
        } else if value < target {
            low = pos + 1;
        } else {
            high = pos - 1;
        }
    }
    None
}";

pub const EXPONENTIAL_SEARCH: &str = "fn exponential_search(arr: &[i64], target: i64) -> Option<usize> {
    if arr.first() == Some(&target) {
        return Some(0);
    }
    let mut bound = 1;
    // Double the bound until it passes the target
    while bound < arr.len() && arr[bound] <= target {
        bound *= 2;
    }
    let mut left = (bound / 2) as isize;
    let mut right = bound.min(arr.len()) as isize - 1;
    while left <= right {
        let mid = left + (right - left) / 2;
        let value = arr[mid as usize];
        if value == target {
            return Some(mid as usize);
        } else if value < target {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }
    None
}";

pub const DIJKSTRA: &str = "fn dijkstra(graph: &Graph, start: usize, end: usize) -> Option<u32> {
    let mut dist = vec![u32::MAX; graph.len()];
    let mut done = vec![false; graph.len()];
    dist[start] = 0;
    // Pick the closest unfinished node each round
    while let Some(u) = (0..graph.len())
        .filter(|&v| !done[v] && dist[v] != u32::MAX)
        .min_by_key(|&v| dist[v])
    {
        done[u] = true;
        if u == end {
            return Some(dist[u]);
        }
        for &(v, w) in &graph[u] {
            let alt = dist[u] + w;
            if alt < dist[v] {
                dist[v] = alt;
            }
        }
    }
    None
}";

pub const BFS: &str = "fn bfs(graph: &Graph, start: usize) -> Vec<usize> {
    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();
    visited[start] = true;
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &graph[u] {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    order
}";

pub const DFS: &str = "fn dfs(graph: &Graph, start: usize) -> Vec<usize> {
    let mut visited = vec![false; graph.len()];
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    order
}

fn visit(graph: &Graph, u: usize, visited: &mut [bool], order: &mut Vec<usize>) {
    visited[u] = true;
    order.push(u);
    for &v in &graph[u] {
        if !visited[v] {
            visit(graph, v, visited, order);
        }
    }
}";

pub const CYCLE_DETECTION: &str = "fn find_cycle(list: &List) -> Option<usize> {
    let (mut slow, mut fast) = (list.head()?, list.head()?);
    // Slow moves one node, fast moves two
    loop {
        let ahead = list.next(fast).and_then(|n| list.next(n));
        fast = ahead?;
        slow = list.next(slow)?;
        if slow == fast {
            break;
        }
    }
    // Restart slow from the head; both now move one node
    slow = list.head()?;
    while slow != fast {
        slow = list.next(slow)?;
        fast = list.next(fast)?;
    }
    Some(slow)
}";

pub const NUMBER_OF_ISLANDS: &str = "fn num_islands(grid: &mut [Vec<u8>]) -> usize {
    let mut count = 0;
    for r in 0..grid.len() {
        for c in 0..grid[r].len() {
            if grid[r][c] == 1 {
                count += 1;
                sink(grid, r, c);
            }
        }
    }
    count
}

fn sink(grid: &mut [Vec<u8>], r: usize, c: usize) {
    if r >= grid.len() || c >= grid[r].len() || grid[r][c] == 0 {
        return;
    }
    grid[r][c] = 0;
    sink(grid, r + 1, c);
    if r > 0 { sink(grid, r - 1, c); }
    sink(grid, r, c + 1);
    if c > 0 { sink(grid, r, c - 1); }
}";

pub const SLIDING_WINDOW: &str = "fn max_window_sum(arr: &[i64], k: usize) -> i64 {
    let mut window_sum: i64 = arr[..k].iter().sum();
    let mut max_sum = window_sum;
    // Slide: drop the left element, take the next one
    for i in k..arr.len() {
        window_sum += arr[i] - arr[i - k];
        max_sum = max_sum.max(window_sum);
    }
    max_sum
}";

pub const TWO_POINTERS: &str = "fn pair_with_sum(arr: &[i64], target: i64) -> Option<(usize, usize)> {
    let (mut left, mut right) = (0, arr.len().checked_sub(1)?);
    while left < right {
        let sum = arr[left] + arr[right];
        if sum == target {
            return Some((left, right));
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
    None
}";

pub const PREFIX_SUM: &str = "fn count_subarrays(arr: &[i64], target: i64) -> usize {
    let mut seen = HashMap::from([(0_i64, 1_usize)]);
    let (mut sum, mut count) = (0, 0);
    for &value in arr {
        sum += value;
        // A previous prefix equal to sum - target closes a match
        if let Some(n) = seen.get(&(sum - target)) {
            count += n;
        }
        *seen.entry(sum).or_insert(0) += 1;
    }
    count
}";

pub const HASH_MAP: &str = "fn duplicates(arr: &[i64]) -> Vec<i64> {
    let mut freq = HashMap::new();
    let mut dups = Vec::new();
    for &value in arr {
        let seen = freq.entry(value).or_insert(0);
        if *seen == 1 {
            dups.push(value);
        }
        *seen += 1;
    }
    dups
}";

pub const VARIABLE_SLIDING_WINDOW: &str = "fn longest_k_distinct(s: &[char], k: usize) -> usize {
    let mut counts = HashMap::new();
    let (mut left, mut best) = (0, 0);
    for right in 0..s.len() {
        *counts.entry(s[right]).or_insert(0) += 1;
        // Shrink until at most k distinct characters remain
        while counts.len() > k {
            let c = counts.get_mut(&s[left]).unwrap();
            *c -= 1;
            if *c == 0 {
                counts.remove(&s[left]);
            }
            left += 1;
        }
        best = best.max(right - left + 1);
    }
    best
}";

pub const BACKTRACKING: &str = "fn subsets(nums: &[i64]) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    explore(nums, 0, &mut Vec::new(), &mut out);
    out
}

fn explore(nums: &[i64], start: usize, path: &mut Vec<i64>, out: &mut Vec<Vec<i64>>) {
    out.push(path.clone());
    for i in start..nums.len() {
        path.push(nums[i]);
        explore(nums, i + 1, path, out);
        path.pop();
    }
}";

pub const MEMOIZATION: &str = "fn fib(n: usize, memo: &mut HashMap<usize, u64>) -> u64 {
    if n < 2 {
        return n as u64;
    }
    if let Some(&cached) = memo.get(&n) {
        return cached;
    }
    let value = fib(n - 1, memo) + fib(n - 2, memo);
    memo.insert(n, value);
    value
}";

pub const DYNAMIC_PROGRAMMING: &str = "fn fib(n: usize) -> u64 {
    let mut table = vec![0, 1];
    for i in 2..=n {
        // Each entry only needs the two before it
        table.push(table[i - 1] + table[i - 2]);
    }
    table[n]
}";

pub const GREEDY: &str = "fn make_change(coins: &[i64], amount: i64) -> Vec<i64> {
    let mut remaining = amount;
    let mut used = Vec::new();
    // Coins are sorted largest first
    for &coin in coins {
        while remaining >= coin {
            remaining -= coin;
            used.push(coin);
        }
    }
    used
}";

pub const TOPOLOGICAL_SORT: &str = "fn topo_sort(graph: &Graph) -> Option<Vec<usize>> {
    let mut in_degree = vec![0; graph.len()];
    for edges in graph {
        for &v in edges {
            in_degree[v] += 1;
        }
    }
    let mut queue: VecDeque<usize> = (0..graph.len()).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::new();
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &graph[u] {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
            }
        }
    }
    (order.len() == graph.len()).then_some(order)
}";

pub const UNION_FIND: &str = "fn find(parent: &[usize], mut x: usize) -> usize {
    while parent[x] != x {
        x = parent[x];
    }
    x
}

fn union(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (ra, rb) = (find(parent, a), find(parent, b));
    if ra == rb {
        return;
    }
    if rank[ra] < rank[rb] {
        parent[ra] = rb;
    } else if rank[ra] > rank[rb] {
        parent[rb] = ra;
    } else {
        parent[rb] = ra;
        rank[ra] += 1;
    }
}";

pub const BIT_MANIPULATION: &str = "fn single_number(nums: &[i64]) -> i64 {
    let mut acc = 0;
    for &n in nums {
        // Pairs cancel out: x ^ x == 0
        acc ^= n;
    }
    acc
}";
