use std::fmt;

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

pub fn cartesian_product<T>(vv: &[Vec<T>]) -> Vec<Vec<&T>> {
    let lens: Vec<usize> = vv.iter().map(|l| l.len()).collect();
    let mut idxs = vec![0; vv.len()];
    let mut i = idxs.len() - 1;
    let mut res = vec![];
    loop {
        let mut v = vec![];
        for (i1, &i2) in idxs.iter().enumerate() {
            v.push(&vv[i1][i2]);
        }
        res.push(v);

        // increment idxs
        loop {
            if idxs[i] < lens[i] - 1 {
                idxs[i] += 1;
                i = idxs.len() - 1;
                break;
            } else {
                idxs[i] = 0;
                if i == 0 {
                    return res;
                }
            }
            i -= 1;
        }
    }
}

#[test]
fn test_cartesian_product() {
    let vv = vec![vec![1, 2], vec![10], vec![100, 200]];
    let prod = cartesian_product(&vv);
    assert_eq!(prod.len(), 4);
    assert_eq!(prod[0], vec![&1, &10, &100]);
    assert_eq!(prod[3], vec![&2, &10, &200]);
}

#[test]
fn test_vec_to_string() {
    assert_eq!(vec_to_string(&[1, 2, 3]), "[1, 2, 3]");
}
